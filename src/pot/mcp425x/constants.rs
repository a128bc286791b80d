/// A private module encapsulating memory addresses for the MCP4251/MCP4252.
pub mod registers {
    pub const WIPER0: u8 = 0x00;
    pub const WIPER1: u8 = 0x01;
    pub const TCON: u8 = 0x04;
    pub const STATUS: u8 = 0x05;
}

/// A private module encapsulating the 2 bit SPI command field.
pub mod commands {
    pub const WRITE: u8 = 0b00;
    pub const INCREMENT: u8 = 0b01;
    pub const DECREMENT: u8 = 0b10;
    pub const READ: u8 = 0b11;
}

/// A private module to encapsulate acknowledgment patterns and data limits.
pub mod mnemonics {
    /// Echo of a successful 8 bit command.
    pub const ACK_BYTE: u8 = 0xFF;
    /// Echo of a successful 16 bit write command.
    pub const ACK_WORD: u16 = 0xFFFF;
    /// Lowest echo of a successful 16 bit read command (top 7 bits set).
    ///
    /// The data read is the echo minus this value.
    pub const ACK_READ: u16 = 0xFE00;
    /// The 10 bit data field of a 16 bit command.
    pub const DATA_MASK: u16 = 0x3FF;
    /// Full scale wiper position (257 taps).
    pub const MAX_WIPER: u16 = 0x100;
}

/// Build an 8 bit command: `AAAA CC 00`.
pub(super) const fn command_byte(address: u8, command: u8) -> u8 {
    (address << 4) | (command << 2)
}

/// Build a 16 bit command: `AAAA CC DDDDDDDDDD`.
pub(super) const fn command_word(address: u8, command: u8, data: u16) -> u16 {
    ((address as u16) << 12) | ((command as u16) << 10) | (data & mnemonics::DATA_MASK)
}
