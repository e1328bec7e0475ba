pub mod assertions;

pub mod bit_reversal_iterator;
pub mod io;
