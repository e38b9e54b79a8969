/// Local CSV files and sheet-export directories.
pub mod fs;
