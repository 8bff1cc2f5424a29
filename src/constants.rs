// How many distinct members the default set can hold.
pub const MAX_SIZE: usize = 10;

// Separator written between members when dumping a set.
pub const DUMP_DELIMITER: &str = "  ";
