pub mod error;

pub mod common {
    pub mod address;
    pub mod cmd_defs;
}

pub mod gear {
    pub mod address;
    pub mod cmd_defs;
}

pub mod control {
    pub mod address;
    pub mod cmd_defs;
    pub mod event;
}

pub mod utils {
    pub mod decode;
    pub mod fallback;
    pub mod frame;
}

pub mod console;
