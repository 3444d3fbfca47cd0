pub const E_ZERO: u64 = 0;

pub const E_BOOLEAN_ELEMENT: u64 = 1;
pub const E_BYTE_ELEMENT: u64 = 1;
pub const E_CHAR_ELEMENT: u64 = 2;
pub const E_SHORT_ELEMENT: u64 = 2;
pub const E_INT_ELEMENT: u64 = 4;
pub const E_LONG_ELEMENT: u64 = 8;
pub const E_FLOAT_ELEMENT: u64 = 4;
pub const E_DOUBLE_ELEMENT: u64 = 8;
pub const E_REFERENCE_ELEMENT: u64 = 8;

pub const E_CLONE_BASE: u64 = 100;
pub const E_REFERENCE_TYPE: u64 = 8;
