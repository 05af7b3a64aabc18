//! SNES (Super Nintendo Entertainment System) CPU-side core.
//!
//! This crate pairs the 65C816 register file and addressing engine from
//! `emu_core` with the SNES-specific parts an opcode dispatcher talks to:
//!
//! - **CPU**: operand read/write through any 65C816 addressing mode
//! - **Memory**: 128KB WRAM with the low-bank mirror, MMIO routing to the PPU
//! - **PPU**: background, scroll, tilemap, mode 7, OAM, VRAM and CGRAM
//!   register units
//!
//! Opcode dispatch, timing, audio and pixel output are handled elsewhere.

#![allow(clippy::upper_case_acronyms)]

mod bus;
mod cpu;
pub mod ppu;

pub use bus::SnesBus;
pub use cpu::SnesCpu;
pub use emu_core::cpu_65c816::{AddressPair, AddressingMode, Memory65c816, Registers};
use emu_core::logging::{log, LogCategory, LogLevel};
use ppu::Ppu;
use serde::de::Error as _;
use thiserror::Error;

const SAVE_STATE_VERSION: u64 = 1;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnesError {
    #[error("BG{} has no color depth in screen mode {mode}", .layer + 1)]
    Configuration { mode: u8, layer: usize },
}

/// SNES system implementation
#[derive(Debug, Clone)]
pub struct SnesSystem {
    cpu: SnesCpu,
}

impl SnesSystem {
    /// Create a new SNES system
    pub fn new() -> Self {
        Self {
            cpu: SnesCpu::new(SnesBus::new()),
        }
    }

    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    pub fn cpu(&self) -> &SnesCpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut SnesCpu {
        &mut self.cpu
    }

    pub fn bus(&self) -> &SnesBus {
        self.cpu.bus()
    }

    pub fn bus_mut(&mut self) -> &mut SnesBus {
        self.cpu.bus_mut()
    }

    pub fn ppu(&self) -> &Ppu {
        self.cpu.bus().ppu()
    }

    pub fn ppu_mut(&mut self) -> &mut Ppu {
        self.cpu.bus_mut().ppu_mut()
    }

    /// Snapshot of registers, WRAM and all PPU state
    pub fn save_state(&self) -> Result<serde_json::Value, serde_json::Error> {
        Ok(serde_json::json!({
            "version": SAVE_STATE_VERSION,
            "cpu": serde_json::to_value(&self.cpu.regs)?,
            "bus": serde_json::to_value(self.cpu.bus())?,
        }))
    }

    pub fn load_state(&mut self, v: &serde_json::Value) -> Result<(), serde_json::Error> {
        let version = v.get("version").and_then(|v| v.as_u64());
        if version != Some(SAVE_STATE_VERSION) {
            return Err(serde_json::Error::custom(format!(
                "unsupported save state version {:?}",
                version
            )));
        }

        let regs: Registers = serde_json::from_value(section(v, "cpu")?)?;
        let bus: SnesBus = serde_json::from_value(section(v, "bus")?)?;

        self.cpu.regs = regs;
        *self.cpu.bus_mut() = bus;

        log(LogCategory::CPU, LogLevel::Info, || {
            format!("CPU: state loaded, PC=${:02X}:{:04X}", self.cpu.regs.pbr, self.cpu.regs.pc)
        });
        Ok(())
    }
}

fn section(v: &serde_json::Value, name: &'static str) -> Result<serde_json::Value, serde_json::Error> {
    v.get(name)
        .cloned()
        .ok_or_else(|| serde_json::Error::missing_field(name))
}

impl Default for SnesSystem {
    fn default() -> Self {
        Self::new()
    }
}
