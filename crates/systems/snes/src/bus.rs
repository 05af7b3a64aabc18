//! SNES memory bus implementation

use crate::ppu::Ppu;
use emu_core::cpu_65c816::Memory65c816;
use emu_core::logging::{log, LogCategory, LogLevel};
use serde::{Deserialize, Serialize};

const WRAM_SIZE: usize = 0x20000;

/// SNES memory bus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnesBus {
    /// 128KB WRAM (work RAM)
    wram: Vec<u8>,
    ppu: Ppu,
}

impl SnesBus {
    pub fn new() -> Self {
        Self {
            wram: vec![0; WRAM_SIZE],
            ppu: Ppu::new(),
        }
    }

    pub fn ppu(&self) -> &Ppu {
        &self.ppu
    }

    pub fn ppu_mut(&mut self) -> &mut Ppu {
        &mut self.ppu
    }

    pub fn wram(&self) -> &[u8] {
        &self.wram
    }
}

impl Default for SnesBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory65c816 for SnesBus {
    fn read(&self, addr: u32) -> u8 {
        let bank = (addr >> 16) as u8;
        let offset = (addr & 0xFFFF) as u16;

        match bank {
            // Banks $00-$3F and $80-$BF: System area
            0x00..=0x3F | 0x80..=0xBF => match offset {
                // WRAM (shadow at $0000-$1FFF)
                0x0000..=0x1FFF => self.wram[offset as usize],
                // PPU registers
                0x2100..=0x213F => self.ppu.read_register(offset),
                _ => open_bus(addr),
            },
            // Banks $7E-$7F: Full WRAM
            0x7E..=0x7F => {
                let wram_addr = ((bank as usize - 0x7E) << 16) | offset as usize;
                self.wram[wram_addr]
            }
            _ => open_bus(addr),
        }
    }

    fn write(&mut self, addr: u32, val: u8) {
        let bank = (addr >> 16) as u8;
        let offset = (addr & 0xFFFF) as u16;

        match bank {
            // Banks $00-$3F and $80-$BF: System area
            0x00..=0x3F | 0x80..=0xBF => match offset {
                // WRAM (shadow at $0000-$1FFF)
                0x0000..=0x1FFF => self.wram[offset as usize] = val,
                // PPU registers
                0x2100..=0x213F => self.ppu.write_register(offset, val),
                _ => log(LogCategory::Bus, LogLevel::Trace, || {
                    format!("Bus: unmapped write ${:06X} = ${:02X}", addr, val)
                }),
            },
            // Banks $7E-$7F: Full WRAM
            0x7E..=0x7F => {
                let wram_addr = ((bank as usize - 0x7E) << 16) | offset as usize;
                self.wram[wram_addr] = val;
            }
            _ => log(LogCategory::Bus, LogLevel::Trace, || {
                format!("Bus: unmapped write ${:06X} = ${:02X}", addr, val)
            }),
        }
    }
}

fn open_bus(addr: u32) -> u8 {
    log(LogCategory::Bus, LogLevel::Trace, || {
        format!("Bus: unmapped read ${:06X}", addr)
    });
    0
}
