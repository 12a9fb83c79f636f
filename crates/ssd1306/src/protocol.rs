//! Wire-level protocol helpers for the SSD1306 over a two-wire bus.

/// Default 7-bit bus address (`SA0` tied low).
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Control byte announcing a single command byte (`Co = 1`, `D/C# = 0`).
pub const CONTROL_COMMAND: u8 = 0x80;
/// Control byte announcing a run of GDDRAM data bytes (`Co = 0`, `D/C# = 1`).
pub const CONTROL_DATA: u8 = 0x40;

/// Packet size for a one-command write.
///
/// Layout:
/// - 1 control byte
/// - 1 command byte
pub const COMMAND_PACKET_SIZE: usize = 2;

pub const SET_CONTRAST: u8 = 0x81;
pub const SET_ENTIRE_ON: u8 = 0xA4;
pub const SET_NORM_INV: u8 = 0xA6;
pub const SET_DISP: u8 = 0xAE;
pub const SET_MEM_ADDR: u8 = 0x20;
pub const SET_COL_ADDR: u8 = 0x21;
pub const SET_PAGE_ADDR: u8 = 0x22;
pub const SET_DISP_START_LINE: u8 = 0x40;
pub const SET_SEG_REMAP: u8 = 0xA0;
pub const SET_MUX_RATIO: u8 = 0xA8;
pub const SET_COM_OUT_DIR: u8 = 0xC0;
pub const SET_DISP_OFFSET: u8 = 0xD3;
pub const SET_COM_PIN_CFG: u8 = 0xDA;
pub const SET_DISP_CLK_DIV: u8 = 0xD5;
pub const SET_PRECHARGE: u8 = 0xD9;
pub const SET_VCOM_DESEL: u8 = 0xDB;
pub const SET_CHARGE_PUMP: u8 = 0x8D;

/// Number of command bytes produced by [`init_sequence`].
pub const INIT_SEQUENCE_LEN: usize = 25;

/// Builds a single-command packet.
#[inline]
pub const fn build_command_packet(command: u8) -> [u8; COMMAND_PACKET_SIZE] {
    [CONTROL_COMMAND, command]
}

/// Power-up configuration for a panel with `height` rows.
///
/// Returns `None` when `height` is not a multiple of 8 in `8..=64`.
pub fn init_sequence(
    height: usize,
    contrast: u8,
    external_vcc: bool,
) -> Option<[u8; INIT_SEQUENCE_LEN]> {
    if height == 0 || height > 64 || height % 8 != 0 {
        return None;
    }

    let precharge = if external_vcc { 0x22 } else { 0xF1 };
    let charge_pump = if external_vcc { 0x10 } else { 0x14 };

    Some([
        SET_DISP,
        SET_MEM_ADDR,
        0x00, // horizontal addressing
        SET_DISP_START_LINE,
        SET_SEG_REMAP | 0x01,
        SET_MUX_RATIO,
        (height - 1) as u8,
        SET_COM_OUT_DIR | 0x08,
        SET_DISP_OFFSET,
        0x00,
        SET_COM_PIN_CFG,
        if height == 64 { 0x12 } else { 0x02 },
        SET_DISP_CLK_DIV,
        0x80,
        SET_PRECHARGE,
        precharge,
        SET_VCOM_DESEL,
        0x30,
        SET_CONTRAST,
        contrast,
        SET_ENTIRE_ON,
        SET_NORM_INV,
        SET_CHARGE_PUMP,
        charge_pump,
        SET_DISP | 0x01,
    ])
}

/// Column and page window covering the whole panel, as sent before a frame write.
///
/// Returns `None` when the geometry does not fit the controller's address space.
pub fn full_window(width: usize, pages: usize) -> Option<[u8; 6]> {
    if width == 0 || width > 128 || pages == 0 || pages > 8 {
        return None;
    }

    Some([
        SET_COL_ADDR,
        0,
        (width - 1) as u8,
        SET_PAGE_ADDR,
        0,
        (pages - 1) as u8,
    ])
}
