use serde_derive::Serialize;

/// One tagged frame line from the bus bridge: `state,frame,addressing,direction,output`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub state: char,
    pub frame: String,
    pub addressing: char,
    pub direction: Option<char>,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Record(Record),
    /// Bridge noise, not printed
    Noise,
    /// Anything else, printed as is
    Passthrough(String),
}

const NOISE: [&str; 4] = ["", "\n", "x", "xx"];

fn is_frame_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_lowercase()
}

fn parse_record(line: &str) -> Option<Record> {
    if line.contains('\n') {
        return None;
    }
    let mut chars = line.chars();
    let state = chars.next()?;
    if chars.next()? != ',' {
        return None;
    }
    let (frame, rest) = chars.as_str().split_once(',')?;
    if !(4..=6).contains(&frame.len()) || !frame.chars().all(is_frame_char) {
        return None;
    }
    let mut chars = rest.chars();
    let addressing = chars.next()?;
    if chars.next()? != ',' {
        return None;
    }
    // Direction is optional. A direction character is only taken when it is
    // followed by a separator, so ",," gives a ',' direction.
    let rest = chars.as_str();
    let mut chars = rest.chars();
    let (direction, output) = match (chars.next(), chars.next()) {
        (Some(d), Some(',')) => (Some(d), chars.as_str()),
        (Some(','), _) => (None, &rest[1..]),
        _ => return None,
    };
    Some(Record {
        state,
        frame: frame.to_string(),
        addressing,
        direction,
        output: output.to_string(),
    })
}

/// Split a line from the bridge into its fields.
pub fn parse_line(line: &str) -> Line {
    if NOISE.contains(&line) {
        return Line::Noise;
    }
    let line = line.strip_suffix('\n').unwrap_or(line);
    match parse_record(line) {
        Some(record) => Line::Record(record),
        None => Line::Passthrough(line.to_string()),
    }
}

#[cfg(test)]
mod test {
    use super::{parse_line, Line, Record};

    fn record(line: &str) -> Record {
        match parse_line(line) {
            Line::Record(r) => r,
            l => panic!("Not a record: {:?}", l),
        }
    }

    #[test]
    fn full_record() {
        assert_eq!(
            record("A,ff00,s,t,ok\n"),
            Record {
                state: 'A',
                frame: "ff00".to_string(),
                addressing: 's',
                direction: Some('t'),
                output: "ok".to_string(),
            }
        );
    }

    #[test]
    fn empty_direction_and_output() {
        let r = record("R,01a580,d,,");
        assert_eq!(r.frame, "01a580");
        assert_eq!(r.direction, None);
        assert_eq!(r.output, "");
    }

    #[test]
    fn separator_as_field() {
        let r = record("R,0101,s,,,x");
        assert_eq!(r.direction, Some(','));
        assert_eq!(r.output, "x");

        let r = record(",,0101,,,,");
        assert_eq!(r.state, ',');
        assert_eq!(r.addressing, ',');
        assert_eq!(r.direction, None);
        assert_eq!(r.output, "");
    }

    #[test]
    fn output_keeps_commas() {
        let r = record("R,0101,s,r,a,b,c");
        assert_eq!(r.direction, Some('r'));
        assert_eq!(r.output, "a,b,c");
    }

    #[test]
    fn frame_pattern() {
        // Lower case letters outside a-f pass the tokenizer
        assert_eq!(record("R,01g1,s,,").frame, "01g1");
        assert_eq!(
            parse_line("R,01F1,s,,"),
            Line::Passthrough("R,01F1,s,,".to_string())
        );
        assert_eq!(
            parse_line("R,010,s,,"),
            Line::Passthrough("R,010,s,,".to_string())
        );
        assert_eq!(
            parse_line("R,0101010,s,,"),
            Line::Passthrough("R,0101010,s,,".to_string())
        );
    }

    #[test]
    fn noise() {
        for l in ["", "\n", "x", "xx"] {
            assert_eq!(parse_line(l), Line::Noise);
        }
        assert_eq!(parse_line("xxx"), Line::Passthrough("xxx".to_string()));
        assert_eq!(parse_line("x\n"), Line::Passthrough("x".to_string()));
    }

    #[test]
    fn passthrough() {
        assert_eq!(
            parse_line("DALI bridge v1.2\n"),
            Line::Passthrough("DALI bridge v1.2".to_string())
        );
        assert_eq!(parse_line("R,0101,s"), Line::Passthrough("R,0101,s".to_string()));
        assert_eq!(
            parse_line("R,0101,s,t\n\n"),
            Line::Passthrough("R,0101,s,t\n".to_string())
        );
    }
}
