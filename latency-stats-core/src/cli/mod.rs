mod report;
#[cfg(test)]
mod tests;

pub use report::*;
