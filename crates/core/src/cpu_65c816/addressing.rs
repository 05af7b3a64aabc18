//! 65C816 operand-address resolution
//!
//! Every function here is a pure data transform over the register file and
//! the memory bus: operand bytes are fetched from `K:PC+1..` (the opcode sits
//! at `K:PC`), pointers are dereferenced where the mode says so, and the
//! result is handed back without touching PC, flags or cycle counts.
//!
//! Data modes return an [`AddressPair`]: the address of the low byte of the
//! operand and the address its high byte is read from when the access is
//! 16 bits wide. Jump-indirect modes return the new program counter.
//!
//! Two quirks are reproduced on purpose:
//! - Bank-relative modes (absolute, indexed, indirect) form a 24-bit address
//!   and step to the high byte across the full address space, so the high
//!   byte of `DBR:FFFF` is fetched from `(DBR+1):0000`.
//! - In emulation mode with `DL == 0`, direct page modes address the page
//!   `00:DH00` and wrap inside it the way a 6502 wraps in zero page. The
//!   `[d]` forms never take this path.

use super::{bank_address, long_address, Memory65c816, Registers, ADDRESS_MASK};

/// Effective address of a (possibly 16-bit) operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressPair {
    /// Address of the low byte
    pub low: u32,
    /// Address of the high byte
    pub high: u32,
}

impl AddressPair {
    /// High byte immediately follows the low byte in the 24-bit space
    pub fn contiguous(low: u32) -> Self {
        let low = low & ADDRESS_MASK;
        Self {
            low,
            high: (low + 1) & ADDRESS_MASK,
        }
    }

    /// Both bytes live in bank 0 at the given offsets
    pub fn bank0(low: u16, high: u16) -> Self {
        Self {
            low: low as u32,
            high: high as u32,
        }
    }

    /// Read the operand bytes as `(high, low)`
    pub fn read<M: Memory65c816>(&self, memory: &M) -> (u8, u8) {
        (memory.read(self.high), memory.read(self.low))
    }

    /// Read the operand as a little-endian 16-bit word
    pub fn read_word<M: Memory65c816>(&self, memory: &M) -> u16 {
        let (hh, ll) = self.read(memory);
        u16::from_le_bytes([ll, hh])
    }

    /// Write a 16-bit word, low byte first
    pub fn write_word<M: Memory65c816>(&self, memory: &mut M, val: u16) {
        let [ll, hh] = val.to_le_bytes();
        memory.write(self.low, ll);
        memory.write(self.high, hh);
    }
}

/// Data addressing modes an opcode dispatcher can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// `a`
    Absolute,
    /// `a,X`
    AbsoluteX,
    /// `a,Y`
    AbsoluteY,
    /// `al`
    AbsoluteLong,
    /// `al,X`
    AbsoluteLongX,
    /// `d`
    Direct,
    /// `d,X`
    DirectX,
    /// `d,Y`
    DirectY,
    /// `(d)`
    DirectIndirect,
    /// `(d,X)`
    DirectIndirectX,
    /// `(d),Y`
    DirectIndirectY,
    /// `[d]`
    DirectIndirectLong,
    /// `[d],Y`
    DirectIndirectLongY,
    /// `d,S`
    StackRelative,
    /// `(d,S),Y`
    StackRelativeIndirectY,
}

/// Resolve the effective address of the instruction at `K:PC`
pub fn resolve<M: Memory65c816>(mode: AddressingMode, regs: &Registers, memory: &M) -> AddressPair {
    match mode {
        AddressingMode::Absolute => absolute(regs, memory),
        AddressingMode::AbsoluteX => absolute_x(regs, memory),
        AddressingMode::AbsoluteY => absolute_y(regs, memory),
        AddressingMode::AbsoluteLong => absolute_long(regs, memory),
        AddressingMode::AbsoluteLongX => absolute_long_x(regs, memory),
        AddressingMode::Direct => direct(regs, memory),
        AddressingMode::DirectX => direct_x(regs, memory),
        AddressingMode::DirectY => direct_y(regs, memory),
        AddressingMode::DirectIndirect => direct_indirect(regs, memory),
        AddressingMode::DirectIndirectX => direct_indirect_x(regs, memory),
        AddressingMode::DirectIndirectY => direct_indirect_y(regs, memory),
        AddressingMode::DirectIndirectLong => direct_indirect_long(regs, memory),
        AddressingMode::DirectIndirectLongY => direct_indirect_long_y(regs, memory),
        AddressingMode::StackRelative => stack_relative(regs, memory),
        AddressingMode::StackRelativeIndirectY => stack_relative_indirect_y(regs, memory),
    }
}

/// Operand byte `n` bytes after the opcode; PC wraps inside the program bank
fn operand_byte<M: Memory65c816>(regs: &Registers, memory: &M, n: u16) -> u8 {
    memory.read_bank(regs.pbr, regs.pc.wrapping_add(n))
}

fn operand_word<M: Memory65c816>(regs: &Registers, memory: &M) -> u16 {
    let ll = operand_byte(regs, memory, 1);
    let hh = operand_byte(regs, memory, 2);
    u16::from_le_bytes([ll, hh])
}

fn operand_long<M: Memory65c816>(regs: &Registers, memory: &M) -> u32 {
    let ll = operand_byte(regs, memory, 1);
    let mm = operand_byte(regs, memory, 2);
    let hh = operand_byte(regs, memory, 3);
    long_address(hh, mm, ll)
}

/// Read a 16-bit pointer in bank 0; the second byte wraps within the bank
fn bank0_word<M: Memory65c816>(memory: &M, offset: u16) -> u16 {
    let ll = memory.read_bank(0x00, offset);
    let hh = memory.read_bank(0x00, offset.wrapping_add(1));
    u16::from_le_bytes([ll, hh])
}

/// `a` - DBR:aaaa
pub fn absolute<M: Memory65c816>(regs: &Registers, memory: &M) -> AddressPair {
    AddressPair::contiguous(bank_address(regs.dbr, operand_word(regs, memory)))
}

/// `a,X` - DBR:aaaa + X, carrying into the bank
pub fn absolute_x<M: Memory65c816>(regs: &Registers, memory: &M) -> AddressPair {
    let base = bank_address(regs.dbr, operand_word(regs, memory));
    AddressPair::contiguous(base + regs.get_x() as u32)
}

/// `a,Y` - DBR:aaaa + Y, carrying into the bank
pub fn absolute_y<M: Memory65c816>(regs: &Registers, memory: &M) -> AddressPair {
    let base = bank_address(regs.dbr, operand_word(regs, memory));
    AddressPair::contiguous(base + regs.get_y() as u32)
}

/// `al` - hh:mmll taken straight from the instruction stream
pub fn absolute_long<M: Memory65c816>(regs: &Registers, memory: &M) -> AddressPair {
    AddressPair::contiguous(operand_long(regs, memory))
}

/// `al,X`
pub fn absolute_long_x<M: Memory65c816>(regs: &Registers, memory: &M) -> AddressPair {
    AddressPair::contiguous(operand_long(regs, memory) + regs.get_x() as u32)
}

/// Shared direct page resolution for `d`, `d,X` and `d,Y`.
///
/// The emulation-mode page check runs first: with `DL == 0` only the index
/// low byte participates and the result stays inside page `DH`.
fn direct_indexed<M: Memory65c816>(regs: &Registers, memory: &M, index: u16) -> AddressPair {
    let dd = operand_byte(regs, memory, 1);

    if regs.emulation && regs.dl() == 0x00 {
        let page = (regs.dh() as u16) << 8;
        let ll = dd.wrapping_add(index as u8);
        return AddressPair::bank0(page | ll as u16, page | ll.wrapping_add(1) as u16);
    }

    let low = regs.d.wrapping_add(dd as u16).wrapping_add(index);
    AddressPair::bank0(low, low.wrapping_add(1))
}

/// `d` - 00:(D + dd)
pub fn direct<M: Memory65c816>(regs: &Registers, memory: &M) -> AddressPair {
    direct_indexed(regs, memory, 0)
}

/// `d,X` - 00:(D + dd + X)
pub fn direct_x<M: Memory65c816>(regs: &Registers, memory: &M) -> AddressPair {
    direct_indexed(regs, memory, regs.get_x())
}

/// `d,Y` - 00:(D + dd + Y)
pub fn direct_y<M: Memory65c816>(regs: &Registers, memory: &M) -> AddressPair {
    direct_indexed(regs, memory, regs.get_y())
}

/// `(d)` - pointer at the direct page location, in the data bank
pub fn direct_indirect<M: Memory65c816>(regs: &Registers, memory: &M) -> AddressPair {
    let pointer = direct(regs, memory).read_word(memory);
    AddressPair::contiguous(bank_address(regs.dbr, pointer))
}

/// `(d,X)` - X is added before the pointer is fetched
pub fn direct_indirect_x<M: Memory65c816>(regs: &Registers, memory: &M) -> AddressPair {
    let pointer = direct_x(regs, memory).read_word(memory);
    AddressPair::contiguous(bank_address(regs.dbr, pointer))
}

/// `(d),Y` - Y is added after the pointer is fetched
pub fn direct_indirect_y<M: Memory65c816>(regs: &Registers, memory: &M) -> AddressPair {
    let pointer = direct(regs, memory).read_word(memory);
    AddressPair::contiguous(bank_address(regs.dbr, pointer) + regs.get_y() as u32)
}

fn direct_long_pointer<M: Memory65c816>(regs: &Registers, memory: &M) -> u32 {
    let dd = operand_byte(regs, memory, 1);
    let location = regs.d.wrapping_add(dd as u16);
    let ll = memory.read_bank(0x00, location);
    let mm = memory.read_bank(0x00, location.wrapping_add(1));
    let hh = memory.read_bank(0x00, location.wrapping_add(2));
    long_address(hh, mm, ll)
}

/// `[d]` - full 24-bit pointer at the direct page location, DBR unused
pub fn direct_indirect_long<M: Memory65c816>(regs: &Registers, memory: &M) -> AddressPair {
    AddressPair::contiguous(direct_long_pointer(regs, memory))
}

/// `[d],Y`
pub fn direct_indirect_long_y<M: Memory65c816>(regs: &Registers, memory: &M) -> AddressPair {
    AddressPair::contiguous(direct_long_pointer(regs, memory) + regs.get_y() as u32)
}

/// `d,S` - 00:(S + dd)
pub fn stack_relative<M: Memory65c816>(regs: &Registers, memory: &M) -> AddressPair {
    let dd = operand_byte(regs, memory, 1);
    let low = regs.s.wrapping_add(dd as u16);
    AddressPair::bank0(low, low.wrapping_add(1))
}

/// `(d,S),Y`
pub fn stack_relative_indirect_y<M: Memory65c816>(regs: &Registers, memory: &M) -> AddressPair {
    let pointer = stack_relative(regs, memory).read_word(memory);
    AddressPair::contiguous(bank_address(regs.dbr, pointer) + regs.get_y() as u32)
}

/// `(a)` as used by JMP - new PC read from 00:aaaa
pub fn absolute_indirect<M: Memory65c816>(regs: &Registers, memory: &M) -> u16 {
    bank0_word(memory, operand_word(regs, memory))
}

/// `(a,X)` as used by JMP/JSR - X is added to the operand before the
/// pointer is fetched from the program bank
pub fn absolute_indirect_x<M: Memory65c816>(regs: &Registers, memory: &M) -> u16 {
    let location = operand_word(regs, memory).wrapping_add(regs.get_x());
    let ll = memory.read_bank(regs.pbr, location);
    let hh = memory.read_bank(regs.pbr, location.wrapping_add(1));
    u16::from_le_bytes([ll, hh])
}

/// `[a]` as used by JML - new K:PC read from 00:aaaa
pub fn absolute_indirect_long<M: Memory65c816>(regs: &Registers, memory: &M) -> u32 {
    let location = operand_word(regs, memory);
    let ll = memory.read_bank(0x00, location);
    let mm = memory.read_bank(0x00, location.wrapping_add(1));
    let hh = memory.read_bank(0x00, location.wrapping_add(2));
    long_address(hh, mm, ll)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_65c816::{ArrayMemory, FLAG_INDEX};

    /// Registers in native mode with 16-bit index registers, opcode at K:PC
    fn native(pbr: u8, pc: u16) -> Registers {
        let mut regs = Registers::new();
        regs.set_emulation(false);
        regs.set_status(0x00);
        regs.pbr = pbr;
        regs.pc = pc;
        regs
    }

    fn emulation(pbr: u8, pc: u16) -> Registers {
        let mut regs = Registers::new();
        regs.pbr = pbr;
        regs.pc = pc;
        regs
    }

    /// Place operand bytes after an opcode at K:PC
    fn operands(mem: &mut ArrayMemory, regs: &Registers, bytes: &[u8]) {
        for (i, b) in bytes.iter().enumerate() {
            mem.write_bank(regs.pbr, regs.pc.wrapping_add(1 + i as u16), *b);
        }
    }

    #[test]
    fn test_absolute_high_byte_crosses_bank() {
        let mut mem = ArrayMemory::new();
        mem.write_bank(0x7E, 0x0001, 0xFF);
        mem.write_bank(0x7E, 0x0002, 0xFF);

        let mut regs = emulation(0x7E, 0x0000);
        regs.dbr = 0x12;

        let pair = absolute(&regs, &mem);
        assert_eq!(pair.low, 0x12FFFF);
        assert_eq!(pair.high, 0x130000);
    }

    #[test]
    fn test_absolute_bank_only_moves_on_wrap() {
        let mut mem = ArrayMemory::new();
        let mut regs = native(0x00, 0x8000);
        regs.dbr = 0x12;

        for offset in (0..=0xFFFFu32).step_by(0x101).chain([0xFFFE, 0xFFFF]) {
            operands(&mut mem, &regs, &(offset as u16).to_le_bytes());
            let pair = absolute(&regs, &mem);
            assert_eq!(pair.low >> 16, 0x12, "low bank for {:04X}", offset);
            let expected_high_bank = if offset == 0xFFFF { 0x13 } else { 0x12 };
            assert_eq!(pair.high >> 16, expected_high_bank, "high bank for {:04X}", offset);
        }
    }

    #[test]
    fn test_absolute_x_carries_into_bank() {
        let mut mem = ArrayMemory::new();
        let mut regs = native(0x00, 0x8000);
        regs.dbr = 0x12;
        regs.x = 0x000A;
        operands(&mut mem, &regs, &[0xFE, 0xFF]);

        let pair = absolute_x(&regs, &mem);
        assert_eq!(pair.low, 0x130008);
        assert_eq!(pair.high, 0x130009);
    }

    #[test]
    fn test_absolute_y_uses_8bit_index_in_emulation() {
        let mut mem = ArrayMemory::new();
        let mut regs = emulation(0x00, 0x8000);
        regs.dbr = 0x01;
        regs.y = 0x1234; // high byte is not visible in emulation mode
        operands(&mut mem, &regs, &[0x00, 0x20]);

        let pair = absolute_y(&regs, &mem);
        assert_eq!(pair.low, 0x012034);
        assert_eq!(pair.high, 0x012035);
    }

    #[test]
    fn test_absolute_long_and_indexed() {
        let mut mem = ArrayMemory::new();
        let mut regs = native(0x00, 0x8000);
        regs.x = 0x0010;
        operands(&mut mem, &regs, &[0xF8, 0xFF, 0x7E]);

        assert_eq!(absolute_long(&regs, &mem).low, 0x7EFFF8);
        let pair = absolute_long_x(&regs, &mem);
        assert_eq!(pair.low, 0x7F0008);
        assert_eq!(pair.high, 0x7F0009);
    }

    #[test]
    fn test_absolute_long_wraps_address_space() {
        let mut mem = ArrayMemory::new();
        let regs = native(0x00, 0x8000);
        operands(&mut mem, &regs, &[0xFF, 0xFF, 0xFF]);

        let pair = absolute_long(&regs, &mem);
        assert_eq!(pair.low, 0xFFFFFF);
        assert_eq!(pair.high, 0x000000);
    }

    #[test]
    fn test_direct_native_adds_through_d() {
        let mut mem = ArrayMemory::new();
        let mut regs = native(0x00, 0x8000);
        regs.d = 0x1F00;
        regs.x = 0x0105;
        operands(&mut mem, &regs, &[0x10]);

        assert_eq!(direct(&regs, &mem), AddressPair::bank0(0x1F10, 0x1F11));
        assert_eq!(direct_x(&regs, &mem), AddressPair::bank0(0x2015, 0x2016));
    }

    #[test]
    fn test_direct_native_wraps_in_bank0() {
        let mut mem = ArrayMemory::new();
        let mut regs = native(0x00, 0x8000);
        regs.d = 0xFFF0;
        regs.y = 0x000F;
        operands(&mut mem, &regs, &[0x00]);

        let pair = direct_y(&regs, &mem);
        assert_eq!(pair.low, 0x00FFFF);
        assert_eq!(pair.high, 0x000000);
    }

    #[test]
    fn test_direct_native_zero_dl_is_not_special() {
        let mut mem = ArrayMemory::new();
        let mut regs = native(0x00, 0x8000);
        regs.d = 0x0300;
        regs.x = 0x00FF;
        operands(&mut mem, &regs, &[0x02]);

        // Carries out of the page because we are not in emulation mode
        assert_eq!(direct_x(&regs, &mem).low, 0x000401);
    }

    #[test]
    fn test_direct_emulation_wraps_within_page() {
        let mut mem = ArrayMemory::new();
        let mut regs = emulation(0x00, 0x8000);
        regs.d = 0x0300;
        regs.x = 0x00FF;
        operands(&mut mem, &regs, &[0x02]);

        assert_eq!(direct(&regs, &mem), AddressPair::bank0(0x0302, 0x0303));
        assert_eq!(direct_x(&regs, &mem), AddressPair::bank0(0x0301, 0x0302));

        operands(&mut mem, &regs, &[0xFF]);
        assert_eq!(direct(&regs, &mem), AddressPair::bank0(0x03FF, 0x0300));
    }

    #[test]
    fn test_direct_emulation_nonzero_dl_uses_full_add() {
        let mut mem = ArrayMemory::new();
        let mut regs = emulation(0x00, 0x8000);
        regs.d = 0x0301;
        regs.x = 0x00FF;
        operands(&mut mem, &regs, &[0x02]);

        assert_eq!(direct_x(&regs, &mem).low, 0x000402);
    }

    #[test]
    fn test_direct_indirect_uses_dbr() {
        let mut mem = ArrayMemory::new();
        let mut regs = native(0x00, 0x8000);
        regs.d = 0x0100;
        regs.dbr = 0x7E;
        operands(&mut mem, &regs, &[0x20]);
        mem.write(0x000120, 0x34);
        mem.write(0x000121, 0x12);

        let pair = direct_indirect(&regs, &mem);
        assert_eq!(pair.low, 0x7E1234);
        assert_eq!(pair.high, 0x7E1235);
    }

    #[test]
    fn test_direct_indirect_emulation_pointer_wraps_in_page() {
        let mut mem = ArrayMemory::new();
        let mut regs = emulation(0x00, 0x8000);
        regs.d = 0x0200;
        regs.dbr = 0x01;
        operands(&mut mem, &regs, &[0xFF]);
        mem.write(0x0002FF, 0x78);
        mem.write(0x000200, 0x56);
        mem.write(0x000300, 0xEE); // must not be used

        assert_eq!(direct_indirect(&regs, &mem).low, 0x015678);
    }

    #[test]
    fn test_direct_indirect_x_indexes_before_dereference() {
        let mut mem = ArrayMemory::new();
        let mut regs = native(0x00, 0x8000);
        regs.d = 0x0000;
        regs.dbr = 0x02;
        regs.x = 0x0004;
        operands(&mut mem, &regs, &[0x10]);
        mem.write(0x000014, 0xCD);
        mem.write(0x000015, 0xAB);

        assert_eq!(direct_indirect_x(&regs, &mem).low, 0x02ABCD);
    }

    #[test]
    fn test_direct_indirect_y_indexes_after_dereference() {
        let mut mem = ArrayMemory::new();
        let mut regs = native(0x00, 0x8000);
        regs.dbr = 0x12;
        regs.y = 0x0010;
        operands(&mut mem, &regs, &[0x40]);
        mem.write(0x000040, 0xF8);
        mem.write(0x000041, 0xFF);

        let pair = direct_indirect_y(&regs, &mem);
        assert_eq!(pair.low, 0x130008);
        assert_eq!(pair.high, 0x130009);
    }

    #[test]
    fn test_direct_indirect_long_ignores_dbr_and_emulation_quirk() {
        let mut mem = ArrayMemory::new();
        let mut regs = emulation(0x00, 0x8000);
        regs.d = 0x0100;
        regs.dbr = 0x55;
        regs.y = 0x0002;
        operands(&mut mem, &regs, &[0xFF]);
        // Full 16-bit add: pointer bytes at $01FF/$0200/$0201, not page-wrapped
        mem.write(0x0001FF, 0x00);
        mem.write(0x000200, 0x80);
        mem.write(0x000201, 0x7F);

        assert_eq!(direct_indirect_long(&regs, &mem).low, 0x7F8000);
        let pair = direct_indirect_long_y(&regs, &mem);
        assert_eq!(pair.low, 0x7F8002);
        assert_eq!(pair.high, 0x7F8003);
    }

    #[test]
    fn test_stack_relative() {
        let mut mem = ArrayMemory::new();
        let mut regs = native(0x00, 0x8000);
        regs.s = 0x1FF0;
        regs.dbr = 0x7E;
        regs.y = 0x0001;
        operands(&mut mem, &regs, &[0x03]);
        mem.write(0x001FF3, 0x00);
        mem.write(0x001FF4, 0x40);

        assert_eq!(stack_relative(&regs, &mem), AddressPair::bank0(0x1FF3, 0x1FF4));
        assert_eq!(stack_relative_indirect_y(&regs, &mem).low, 0x7E4001);
    }

    #[test]
    fn test_absolute_indirect_x_indexes_before_dereference() {
        let mut mem = ArrayMemory::new();
        let mut regs = native(0x00, 0x8000);
        regs.x = 0x000A;
        operands(&mut mem, &regs, &[0x00, 0x20]);
        mem.write(0x00200A, 0x56);
        mem.write(0x00200B, 0x34);

        assert_eq!(absolute_indirect_x(&regs, &mem), 0x3456);
    }

    #[test]
    fn test_absolute_indirect_x_reads_program_bank() {
        let mut mem = ArrayMemory::new();
        let mut regs = native(0x03, 0x8000);
        regs.x = 0x0002;
        operands(&mut mem, &regs, &[0x00, 0x90]);
        mem.write(0x039002, 0x11);
        mem.write(0x039003, 0x22);

        assert_eq!(absolute_indirect_x(&regs, &mem), 0x2211);
    }

    #[test]
    fn test_absolute_indirect_and_long() {
        let mut mem = ArrayMemory::new();
        let regs = native(0x05, 0x8000);
        operands(&mut mem, &regs, &[0xFC, 0xFF]);
        mem.write(0x00FFFC, 0x00);
        mem.write(0x00FFFD, 0x80);
        mem.write(0x00FFFE, 0xC0);

        assert_eq!(absolute_indirect(&regs, &mem), 0x8000);
        assert_eq!(absolute_indirect_long(&regs, &mem), 0xC08000);
    }

    #[test]
    fn test_operand_fetch_wraps_in_program_bank() {
        let mut mem = ArrayMemory::new();
        let mut regs = native(0x01, 0xFFFF);
        regs.dbr = 0x00;
        mem.write(0x010000, 0x34);
        mem.write(0x010001, 0x12);
        mem.write(0x020000, 0xEE);

        assert_eq!(absolute(&regs, &mem).low, 0x001234);
    }

    #[test]
    fn test_resolve_matches_direct_calls() {
        let mut mem = ArrayMemory::new();
        let mut regs = native(0x00, 0x8000);
        regs.dbr = 0x7E;
        regs.d = 0x0010;
        regs.x = 0x0003;
        regs.y = 0x0004;
        operands(&mut mem, &regs, &[0x20, 0x30, 0x40]);

        assert_eq!(resolve(AddressingMode::Absolute, &regs, &mem), absolute(&regs, &mem));
        assert_eq!(resolve(AddressingMode::DirectY, &regs, &mem), direct_y(&regs, &mem));
        assert_eq!(
            resolve(AddressingMode::DirectIndirectLongY, &regs, &mem),
            direct_indirect_long_y(&regs, &mem)
        );
    }

    #[test]
    fn test_word_helpers() {
        let mut mem = ArrayMemory::new();
        let pair = AddressPair::contiguous(0x12FFFF);
        pair.write_word(&mut mem, 0xBEEF);
        assert_eq!(mem.read(0x12FFFF), 0xEF);
        assert_eq!(mem.read(0x130000), 0xBE);
        assert_eq!(pair.read(&mem), (0xBE, 0xEF));
        assert_eq!(pair.read_word(&mem), 0xBEEF);
    }

    #[test]
    fn test_index_flag_narrows_direct_x() {
        let mut mem = ArrayMemory::new();
        let mut regs = native(0x00, 0x8000);
        regs.x = 0x1234;
        regs.set_status(FLAG_INDEX);
        operands(&mut mem, &regs, &[0x00]);

        assert_eq!(direct_x(&regs, &mem).low, 0x000034);
    }
}
