pub mod elements;
pub mod keyword;
pub mod parser;
pub mod quality;

pub use elements::ParsedInfo;
pub use parser::parse;
pub use quality::Quality;
