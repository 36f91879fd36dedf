//! The decode space of the 6502: who moves the bus, what the ALU does,
//! and when memory is touched.
//!
//! Every opcode byte maps to a fixed `Instruction` entry. The clever
//! part of the 6502 instruction set is how regular it is: ~56 documented
//! mnemonics share 11 addressing modes, so decode is a matter of pairing
//! an addressing-mode driver with a pure ALU action and a tag saying
//! which direction memory moves.

/// The per-cycle bus procedure an opcode runs: one of the 11 addressing
/// modes, or one of the control procedures whose bus pattern is theirs
/// alone (stack ops, subroutine linkage, jumps, BRK).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    Immediate,   // imm
    Implied,     // imp
    Accumulator, // acc
    ZeroPage,    // zpg
    ZeroPageX,   // zpg,x
    ZeroPageY,   // zpg,y
    Absolute,    // abs
    AbsoluteX,   // abs,x
    AbsoluteY,   // abs,y
    IndirectX,   // (zpg,x)
    IndirectY,   // (zpg),y
    Relative,    // rel
    Brk,
    Rti,
    Php,
    Plp,
    Pha,
    Pla,
    Jsr,
    Rts,
    JmpAbsolute,
    JmpIndirect,
    Illegal,
}

/// A pure register/flag transformation. Actions never touch the bus;
/// the driver decides on which cycle one runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Logical and arithmetic
    Ora,
    And,
    Eor,
    Adc,
    Sbc,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Inc,
    Inx,
    Iny,
    Asl,
    Rol,
    Lsr,
    Ror,
    // Moves
    Lda,
    Ldx,
    Ldy,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Txa,
    Tya,
    Tsx,
    Txs,
    // Branch conditions
    Bpl,
    Bmi,
    Bvc,
    Bvs,
    Bcc,
    Bcs,
    Bne,
    Beq,
    // Flag operations and the rest
    Clc,
    Cld,
    Cli,
    Clv,
    Sec,
    Sed,
    Sei,
    Bit,
    Nop,
}

/// Which way the operand moves through memory. The addressing-mode
/// drivers branch on this to decide when the action fires and whether
/// a write-back happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The driver reads `opr1`, then the action consumes it.
    Read,
    /// The action produces `opr1`, then the driver writes it out.
    Write,
    /// Read, write the raw byte back, write the transformed byte.
    Rmw,
    /// Control procedure, flag op, or transfer: no memory operand.
    None,
}

/// One slot of the decode table.
#[derive(Debug, Clone, Copy)]
pub struct Instruction {
    pub driver: Driver,
    pub action: Action,
    pub access: Access,
}

const fn rd(driver: Driver, action: Action) -> Instruction {
    Instruction {
        driver,
        action,
        access: Access::Read,
    }
}

const fn wr(driver: Driver, action: Action) -> Instruction {
    Instruction {
        driver,
        action,
        access: Access::Write,
    }
}

const fn rmw(driver: Driver, action: Action) -> Instruction {
    Instruction {
        driver,
        action,
        access: Access::Rmw,
    }
}

const fn imp(action: Action) -> Instruction {
    Instruction {
        driver: Driver::Implied,
        action,
        access: Access::None,
    }
}

const fn acc(action: Action) -> Instruction {
    Instruction {
        driver: Driver::Accumulator,
        action,
        access: Access::Rmw,
    }
}

const fn rel(action: Action) -> Instruction {
    Instruction {
        driver: Driver::Relative,
        action,
        access: Access::None,
    }
}

const fn ctl(driver: Driver) -> Instruction {
    Instruction {
        driver,
        action: Action::Nop,
        access: Access::None,
    }
}

/// Anything without a documented mnemonic: completes on its first
/// cycle, touches nothing.
const ILLEGAL: Instruction = ctl(Driver::Illegal);

use Action::*;
use Driver::*;

/// The fixed 256-entry decode table, indexed by opcode byte.
#[rustfmt::skip]
pub const INSTRUCTIONS: [Instruction; 256] = [
    /* 0x00 */ ctl(Brk),
    /* 0x01 */ rd(IndirectX, Ora),
    /* 0x02 */ ILLEGAL,
    /* 0x03 */ ILLEGAL,
    /* 0x04 */ ILLEGAL,
    /* 0x05 */ rd(ZeroPage, Ora),
    /* 0x06 */ rmw(ZeroPage, Asl),
    /* 0x07 */ ILLEGAL,
    /* 0x08 */ ctl(Php),
    /* 0x09 */ rd(Immediate, Ora),
    /* 0x0A */ acc(Asl),
    /* 0x0B */ ILLEGAL,
    /* 0x0C */ ILLEGAL,
    /* 0x0D */ rd(Absolute, Ora),
    /* 0x0E */ rmw(Absolute, Asl),
    /* 0x0F */ ILLEGAL,
    /* 0x10 */ rel(Bpl),
    /* 0x11 */ rd(IndirectY, Ora),
    /* 0x12 */ ILLEGAL,
    /* 0x13 */ ILLEGAL,
    /* 0x14 */ ILLEGAL,
    /* 0x15 */ rd(ZeroPageX, Ora),
    /* 0x16 */ rmw(ZeroPageX, Asl),
    /* 0x17 */ ILLEGAL,
    /* 0x18 */ imp(Clc),
    /* 0x19 */ rd(AbsoluteY, Ora),
    /* 0x1A */ ILLEGAL,
    /* 0x1B */ ILLEGAL,
    /* 0x1C */ ILLEGAL,
    /* 0x1D */ rd(AbsoluteX, Ora),
    /* 0x1E */ rmw(AbsoluteX, Asl),
    /* 0x1F */ ILLEGAL,
    /* 0x20 */ ctl(Jsr),
    /* 0x21 */ rd(IndirectX, And),
    /* 0x22 */ ILLEGAL,
    /* 0x23 */ ILLEGAL,
    /* 0x24 */ rd(ZeroPage, Bit),
    /* 0x25 */ rd(ZeroPage, And),
    /* 0x26 */ rmw(ZeroPage, Rol),
    /* 0x27 */ ILLEGAL,
    /* 0x28 */ ctl(Plp),
    /* 0x29 */ rd(Immediate, And),
    /* 0x2A */ acc(Rol),
    /* 0x2B */ ILLEGAL,
    /* 0x2C */ rd(Absolute, Bit),
    /* 0x2D */ rd(Absolute, And),
    /* 0x2E */ rmw(Absolute, Rol),
    /* 0x2F */ ILLEGAL,
    /* 0x30 */ rel(Bmi),
    /* 0x31 */ rd(IndirectY, And),
    /* 0x32 */ ILLEGAL,
    /* 0x33 */ ILLEGAL,
    /* 0x34 */ ILLEGAL,
    /* 0x35 */ rd(ZeroPageX, And),
    /* 0x36 */ rmw(ZeroPageX, Rol),
    /* 0x37 */ ILLEGAL,
    /* 0x38 */ imp(Sec),
    /* 0x39 */ rd(AbsoluteY, And),
    /* 0x3A */ ILLEGAL,
    /* 0x3B */ ILLEGAL,
    /* 0x3C */ ILLEGAL,
    /* 0x3D */ rd(AbsoluteX, And),
    /* 0x3E */ rmw(AbsoluteX, Rol),
    /* 0x3F */ ILLEGAL,
    /* 0x40 */ ctl(Rti),
    /* 0x41 */ rd(IndirectX, Eor),
    /* 0x42 */ ILLEGAL,
    /* 0x43 */ ILLEGAL,
    /* 0x44 */ ILLEGAL,
    /* 0x45 */ rd(ZeroPage, Eor),
    /* 0x46 */ rmw(ZeroPage, Lsr),
    /* 0x47 */ ILLEGAL,
    /* 0x48 */ ctl(Pha),
    /* 0x49 */ rd(Immediate, Eor),
    /* 0x4A */ acc(Lsr),
    /* 0x4B */ ILLEGAL,
    /* 0x4C */ ctl(JmpAbsolute),
    /* 0x4D */ rd(Absolute, Eor),
    /* 0x4E */ rmw(Absolute, Lsr),
    /* 0x4F */ ILLEGAL,
    /* 0x50 */ rel(Bvc),
    /* 0x51 */ rd(IndirectY, Eor),
    /* 0x52 */ ILLEGAL,
    /* 0x53 */ ILLEGAL,
    /* 0x54 */ ILLEGAL,
    /* 0x55 */ rd(ZeroPageX, Eor),
    /* 0x56 */ rmw(ZeroPageX, Lsr),
    /* 0x57 */ ILLEGAL,
    /* 0x58 */ imp(Cli),
    /* 0x59 */ rd(AbsoluteY, Eor),
    /* 0x5A */ ILLEGAL,
    /* 0x5B */ ILLEGAL,
    /* 0x5C */ ILLEGAL,
    /* 0x5D */ rd(AbsoluteX, Eor),
    /* 0x5E */ rmw(AbsoluteX, Lsr),
    /* 0x5F */ ILLEGAL,
    /* 0x60 */ ctl(Rts),
    /* 0x61 */ rd(IndirectX, Adc),
    /* 0x62 */ ILLEGAL,
    /* 0x63 */ ILLEGAL,
    /* 0x64 */ ILLEGAL,
    /* 0x65 */ rd(ZeroPage, Adc),
    /* 0x66 */ rmw(ZeroPage, Ror),
    /* 0x67 */ ILLEGAL,
    /* 0x68 */ ctl(Pla),
    /* 0x69 */ rd(Immediate, Adc),
    /* 0x6A */ acc(Ror),
    /* 0x6B */ ILLEGAL,
    /* 0x6C */ ctl(JmpIndirect),
    /* 0x6D */ rd(Absolute, Adc),
    /* 0x6E */ rmw(Absolute, Ror),
    /* 0x6F */ ILLEGAL,
    /* 0x70 */ rel(Bvs),
    /* 0x71 */ rd(IndirectY, Adc),
    /* 0x72 */ ILLEGAL,
    /* 0x73 */ ILLEGAL,
    /* 0x74 */ ILLEGAL,
    /* 0x75 */ rd(ZeroPageX, Adc),
    /* 0x76 */ rmw(ZeroPageX, Ror),
    /* 0x77 */ ILLEGAL,
    /* 0x78 */ imp(Sei),
    /* 0x79 */ rd(AbsoluteY, Adc),
    /* 0x7A */ ILLEGAL,
    /* 0x7B */ ILLEGAL,
    /* 0x7C */ ILLEGAL,
    /* 0x7D */ rd(AbsoluteX, Adc),
    /* 0x7E */ rmw(AbsoluteX, Ror),
    /* 0x7F */ ILLEGAL,
    /* 0x80 */ ILLEGAL,
    /* 0x81 */ wr(IndirectX, Sta),
    /* 0x82 */ ILLEGAL,
    /* 0x83 */ ILLEGAL,
    /* 0x84 */ wr(ZeroPage, Sty),
    /* 0x85 */ wr(ZeroPage, Sta),
    /* 0x86 */ wr(ZeroPage, Stx),
    /* 0x87 */ ILLEGAL,
    /* 0x88 */ imp(Dey),
    /* 0x89 */ ILLEGAL,
    /* 0x8A */ imp(Txa),
    /* 0x8B */ ILLEGAL,
    /* 0x8C */ wr(Absolute, Sty),
    /* 0x8D */ wr(Absolute, Sta),
    /* 0x8E */ wr(Absolute, Stx),
    /* 0x8F */ ILLEGAL,
    /* 0x90 */ rel(Bcc),
    /* 0x91 */ wr(IndirectY, Sta),
    /* 0x92 */ ILLEGAL,
    /* 0x93 */ ILLEGAL,
    /* 0x94 */ wr(ZeroPageX, Sty),
    /* 0x95 */ wr(ZeroPageX, Sta),
    /* 0x96 */ wr(ZeroPageY, Stx),
    /* 0x97 */ ILLEGAL,
    /* 0x98 */ imp(Tya),
    /* 0x99 */ wr(AbsoluteY, Sta),
    /* 0x9A */ imp(Txs),
    /* 0x9B */ ILLEGAL,
    /* 0x9C */ ILLEGAL,
    /* 0x9D */ wr(AbsoluteX, Sta),
    /* 0x9E */ ILLEGAL,
    /* 0x9F */ ILLEGAL,
    /* 0xA0 */ rd(Immediate, Ldy),
    /* 0xA1 */ rd(IndirectX, Lda),
    /* 0xA2 */ rd(Immediate, Ldx),
    /* 0xA3 */ ILLEGAL,
    /* 0xA4 */ rd(ZeroPage, Ldy),
    /* 0xA5 */ rd(ZeroPage, Lda),
    /* 0xA6 */ rd(ZeroPage, Ldx),
    /* 0xA7 */ ILLEGAL,
    /* 0xA8 */ imp(Tay),
    /* 0xA9 */ rd(Immediate, Lda),
    /* 0xAA */ imp(Tax),
    /* 0xAB */ ILLEGAL,
    /* 0xAC */ rd(Absolute, Ldy),
    /* 0xAD */ rd(Absolute, Lda),
    /* 0xAE */ rd(Absolute, Ldx),
    /* 0xAF */ ILLEGAL,
    /* 0xB0 */ rel(Bcs),
    /* 0xB1 */ rd(IndirectY, Lda),
    /* 0xB2 */ ILLEGAL,
    /* 0xB3 */ ILLEGAL,
    /* 0xB4 */ rd(ZeroPageX, Ldy),
    /* 0xB5 */ rd(ZeroPageX, Lda),
    /* 0xB6 */ rd(ZeroPageY, Ldx),
    /* 0xB7 */ ILLEGAL,
    /* 0xB8 */ imp(Clv),
    /* 0xB9 */ rd(AbsoluteY, Lda),
    /* 0xBA */ imp(Tsx),
    /* 0xBB */ ILLEGAL,
    /* 0xBC */ rd(AbsoluteX, Ldy),
    /* 0xBD */ rd(AbsoluteX, Lda),
    /* 0xBE */ rd(AbsoluteY, Ldx),
    /* 0xBF */ ILLEGAL,
    /* 0xC0 */ rd(Immediate, Cpy),
    /* 0xC1 */ rd(IndirectX, Cmp),
    /* 0xC2 */ ILLEGAL,
    /* 0xC3 */ ILLEGAL,
    /* 0xC4 */ rd(ZeroPage, Cpy),
    /* 0xC5 */ rd(ZeroPage, Cmp),
    /* 0xC6 */ rmw(ZeroPage, Dec),
    /* 0xC7 */ ILLEGAL,
    /* 0xC8 */ imp(Iny),
    /* 0xC9 */ rd(Immediate, Cmp),
    /* 0xCA */ imp(Dex),
    /* 0xCB */ ILLEGAL,
    /* 0xCC */ rd(Absolute, Cpy),
    /* 0xCD */ rd(Absolute, Cmp),
    /* 0xCE */ rmw(Absolute, Dec),
    /* 0xCF */ ILLEGAL,
    /* 0xD0 */ rel(Bne),
    /* 0xD1 */ rd(IndirectY, Cmp),
    /* 0xD2 */ ILLEGAL,
    /* 0xD3 */ ILLEGAL,
    /* 0xD4 */ ILLEGAL,
    /* 0xD5 */ rd(ZeroPageX, Cmp),
    /* 0xD6 */ rmw(ZeroPageX, Dec),
    /* 0xD7 */ ILLEGAL,
    /* 0xD8 */ imp(Cld),
    /* 0xD9 */ rd(AbsoluteY, Cmp),
    /* 0xDA */ ILLEGAL,
    /* 0xDB */ ILLEGAL,
    /* 0xDC */ ILLEGAL,
    /* 0xDD */ rd(AbsoluteX, Cmp),
    /* 0xDE */ rmw(AbsoluteX, Dec),
    /* 0xDF */ ILLEGAL,
    /* 0xE0 */ rd(Immediate, Cpx),
    /* 0xE1 */ rd(IndirectX, Sbc),
    /* 0xE2 */ ILLEGAL,
    /* 0xE3 */ ILLEGAL,
    /* 0xE4 */ rd(ZeroPage, Cpx),
    /* 0xE5 */ rd(ZeroPage, Sbc),
    /* 0xE6 */ rmw(ZeroPage, Inc),
    /* 0xE7 */ ILLEGAL,
    /* 0xE8 */ imp(Inx),
    /* 0xE9 */ rd(Immediate, Sbc),
    /* 0xEA */ imp(Nop),
    /* 0xEB */ ILLEGAL,
    /* 0xEC */ rd(Absolute, Cpx),
    /* 0xED */ rd(Absolute, Sbc),
    /* 0xEE */ rmw(Absolute, Inc),
    /* 0xEF */ ILLEGAL,
    /* 0xF0 */ rel(Beq),
    /* 0xF1 */ rd(IndirectY, Sbc),
    /* 0xF2 */ ILLEGAL,
    /* 0xF3 */ ILLEGAL,
    /* 0xF4 */ ILLEGAL,
    /* 0xF5 */ rd(ZeroPageX, Sbc),
    /* 0xF6 */ rmw(ZeroPageX, Inc),
    /* 0xF7 */ ILLEGAL,
    /* 0xF8 */ imp(Sed),
    /* 0xF9 */ rd(AbsoluteY, Sbc),
    /* 0xFA */ ILLEGAL,
    /* 0xFB */ ILLEGAL,
    /* 0xFC */ ILLEGAL,
    /* 0xFD */ rd(AbsoluteX, Sbc),
    /* 0xFE */ rmw(AbsoluteX, Inc),
    /* 0xFF */ ILLEGAL,
];

/// Mnemonics for trace output, indexed by opcode byte. Undocumented
/// opcodes show as `???`.
#[rustfmt::skip]
pub const MNEMONICS: [&str; 256] = [
    "brk", "ora", "???", "???", "???", "ora", "asl", "???",
    "php", "ora", "asl", "???", "???", "ora", "asl", "???",
    "bpl", "ora", "???", "???", "???", "ora", "asl", "???",
    "clc", "ora", "???", "???", "???", "ora", "asl", "???",
    "jsr", "and", "???", "???", "bit", "and", "rol", "???",
    "plp", "and", "rol", "???", "bit", "and", "rol", "???",
    "bmi", "and", "???", "???", "???", "and", "rol", "???",
    "sec", "and", "???", "???", "???", "and", "rol", "???",
    "rti", "eor", "???", "???", "???", "eor", "lsr", "???",
    "pha", "eor", "lsr", "???", "jmp", "eor", "lsr", "???",
    "bvc", "eor", "???", "???", "???", "eor", "lsr", "???",
    "cli", "eor", "???", "???", "???", "eor", "lsr", "???",
    "rts", "adc", "???", "???", "???", "adc", "ror", "???",
    "pla", "adc", "ror", "???", "jmp", "adc", "ror", "???",
    "bvs", "adc", "???", "???", "???", "adc", "ror", "???",
    "sei", "adc", "???", "???", "???", "adc", "ror", "???",
    "???", "sta", "???", "???", "sty", "sta", "stx", "???",
    "dey", "???", "txa", "???", "sty", "sta", "stx", "???",
    "bcc", "sta", "???", "???", "sty", "sta", "stx", "???",
    "tya", "sta", "txs", "???", "???", "sta", "???", "???",
    "ldy", "lda", "ldx", "???", "ldy", "lda", "ldx", "???",
    "tay", "lda", "tax", "???", "ldy", "lda", "ldx", "???",
    "bcs", "lda", "???", "???", "ldy", "lda", "ldx", "???",
    "clv", "lda", "tsx", "???", "ldy", "lda", "ldx", "???",
    "cpy", "cmp", "???", "???", "cpy", "cmp", "dec", "???",
    "iny", "cmp", "dex", "???", "cpy", "cmp", "dec", "???",
    "bne", "cmp", "???", "???", "???", "cmp", "dec", "???",
    "cld", "cmp", "???", "???", "???", "cmp", "dec", "???",
    "cpx", "sbc", "???", "???", "cpx", "sbc", "inc", "???",
    "inx", "sbc", "nop", "???", "cpx", "sbc", "inc", "???",
    "beq", "sbc", "???", "???", "???", "sbc", "inc", "???",
    "sed", "sbc", "???", "???", "???", "sbc", "inc", "???",
];
