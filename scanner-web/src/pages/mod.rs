//! Page modules - the scanner page is the whole app

pub mod scanner;

pub use scanner::ScannerPage;
