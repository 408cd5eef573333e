pub mod generate;
pub mod list;

pub use generate::GenerateCommand;
pub use list::ListCommand;
