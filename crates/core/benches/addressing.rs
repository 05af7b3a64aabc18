use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use emu_core::cpu_65c816::addressing::absolute_indirect_x;
use emu_core::cpu_65c816::{resolve, AddressingMode, Memory65c816, Registers};

/// 64KB of bank-0 memory; every other bank mirrors it
struct BenchMemory {
    ram: Vec<u8>,
}

impl BenchMemory {
    fn new() -> Self {
        let mut ram = vec![0; 0x10000];

        // Operand bytes after an opcode at $8000
        ram[0x8001] = 0x10;
        ram[0x8002] = 0x20;
        ram[0x8003] = 0x7E;

        // Direct page pointers at $0010 and $0012
        ram[0x0010] = 0x00;
        ram[0x0011] = 0x30;
        ram[0x0012] = 0x7F;

        Self { ram }
    }
}

impl Memory65c816 for BenchMemory {
    fn read(&self, addr: u32) -> u8 {
        self.ram[(addr & 0xFFFF) as usize]
    }

    fn write(&mut self, addr: u32, val: u8) {
        self.ram[(addr & 0xFFFF) as usize] = val;
    }
}

fn registers(emulation: bool) -> Registers {
    let mut regs = Registers::new();
    regs.set_emulation(emulation);
    if !emulation {
        regs.set_status(0x00);
    }
    regs.pc = 0x8000;
    regs.dbr = 0x7E;
    regs.x = 0x0004;
    regs.y = 0x0008;
    regs
}

fn bench_resolve_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpu_65c816_resolve");
    let mem = BenchMemory::new();

    let modes = [
        AddressingMode::Absolute,
        AddressingMode::AbsoluteX,
        AddressingMode::AbsoluteLongX,
        AddressingMode::DirectX,
        AddressingMode::DirectIndirectY,
        AddressingMode::DirectIndirectLongY,
        AddressingMode::StackRelativeIndirectY,
    ];

    for mode in modes.iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", mode)),
            mode,
            |b, &mode| {
                let regs = registers(false);
                b.iter(|| black_box(resolve(mode, &regs, &mem)));
            },
        );
    }

    group.finish();
}

fn bench_emulation_direct_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("cpu_65c816_direct_page");
    let mem = BenchMemory::new();

    for emulation in [true, false].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(if *emulation { "emulation" } else { "native" }),
            emulation,
            |b, &emulation| {
                let regs = registers(emulation);
                b.iter(|| black_box(resolve(AddressingMode::DirectIndirectX, &regs, &mem)));
            },
        );
    }

    group.finish();
}

fn bench_jump_indirect(c: &mut Criterion) {
    let mem = BenchMemory::new();
    let regs = registers(false);
    c.bench_function("cpu_65c816_absolute_indirect_x", |b| {
        b.iter(|| black_box(absolute_indirect_x(&regs, &mem)));
    });
}

criterion_group!(
    benches,
    bench_resolve_modes,
    bench_emulation_direct_page,
    bench_jump_indirect
);
criterion_main!(benches);
