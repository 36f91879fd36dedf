use crate::bus::Bus;
use crate::constants::STACK_PAGE;
use crate::opcodes::{Access, Action, Driver, INSTRUCTIONS};

mod actions_flags;
mod actions_logical;
mod actions_move;
mod control;
mod modes;

use actions_flags as flags;
use actions_logical as logical;
use actions_move as moves;

#[cfg(test)]
mod test_helpers;


#[rustfmt::skip]
pub enum StatusFlag {
    Carry            = 0b00000001,
    Zero             = 0b00000010,
    InterruptDisable = 0b00000100,
    Decimal          = 0b00001000,
    Break            = 0b00010000,
    Push             = 0b00100000,
    Overflow         = 0b01000000,
    Negative         = 0b10000000,
}

/// Pending interrupt request lines, kept as a bitmask in `Cpu6502::intr`.
///
/// Only RESET has a service sequence here; NMI and IRQ are latched so a
/// host can observe them, but their acknowledge cycles belong to the
/// surrounding machine.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy)]
pub enum Interrupt {
    Reset = 0b001,
    Nmi   = 0b010,
    Irq   = 0b100,
}

/// This struct implements the MOS Technology 6502 central processing
/// unit, stepped one bus cycle at a time.
///
/// http://www.6502.org/
/// https://en.wikipedia.org/wiki/MOS_Technology_6502
///
/// Each call to `tick` performs at most one bus access and advances the
/// micro-cycle counter; an instruction is in flight whenever `cycle` is
/// non-zero. The externally visible bus traffic - including the dummy
/// reads the real chip performs while it is busy internally - matches
/// the documented behavior of the NMOS part, so the core can sit at the
/// center of a larger machine whose peripherals care about every cycle.
pub struct Cpu6502 {
    /// "A" register - The accumulator. Typical results of operations are
    /// stored here. In combination with the status register, supports using
    /// the status register for carrying, overflow detection, and so on.
    pub a: u8,
    /// "X" register.
    /// Used for several addressing modes. They can be used as loop counters
    /// easily, using INC/DEC and branch instructions. Not being the
    /// accumulator, they have limited addressing modes themselves when
    /// loading and saving.
    pub x: u8,
    /// "Y" register.
    pub y: u8,

    /// "PC" - Program counter.
    /// The 2-byte program counter supports 65536 direct (unbanked) memory
    /// locations. It moves through the CPU's internal fetch logic, an
    /// interrupt vector, or the RTS/JMP/JSR/Branch instructions.
    pub pc: u16,

    /// "S" - Stack pointer
    ///
    /// The 6502 has hardware support for a stack implemented using a
    /// 256-byte array whose location is hardcoded at page 0x01
    /// (0x0100-0x01FF), using this register for the low byte.
    ///
    /// The 6502 uses a descending stack (it grows downwards).
    pub sp: u8,

    /// "P" - Status register.
    /// P has 6 bits used by the ALU but is byte-wide. PHP, PLP, arithmetic,
    /// testing, and branch instructions can access this register.
    ///
    ///   7  bit  0
    /// ---- ----
    /// NVss DIZC
    /// |||| ||||
    /// |||| |||+- Carry
    /// |||| ||+-- Zero
    /// |||| |+--- Interrupt Disable
    /// |||| +---- Decimal
    /// ||++------ No CPU effect, see: the B flag
    /// |+-------- Overflow
    /// +--------- Negative
    ///
    /// Bits 4 and 5 are not latched in silicon: they read as set in any
    /// byte pushed by BRK or PHP and are masked off by PLP and RTI, so
    /// they stay clear here.
    pub p: u8,

    /// Micro-cycle counter within the current instruction. Zero means
    /// the next tick fetches an opcode.
    pub cycle: u8,

    /// Pending interrupt requests (a mask of `Interrupt` bits).
    pub intr: u8,

    /// Opcode byte latched by the fetch cycle.
    opc: u8,
    /// First operand latch. Addressing-mode drivers stage the memory
    /// operand here; store actions leave the register to be written here.
    opr1: u8,
    /// Second operand latch, for the cycles that juggle two bytes
    /// (address low bytes, branch offsets).
    opr2: u8,
    /// Effective-address latch.
    ea: u16,
}

impl Cpu6502 {
    /// Power-on state: stack pointer at the top of the stack page,
    /// everything else zeroed, no instruction in flight.
    pub fn new(pc: u16) -> Cpu6502 {
        Cpu6502 {
            a: 0,
            x: 0,
            y: 0,
            pc,
            sp: 0xff,
            p: 0,
            cycle: 0,
            intr: 0,
            opc: 0,
            opr1: 0,
            opr2: 0,
            ea: 0,
        }
    }

    /// Advance the processor by exactly one bus clock.
    ///
    /// A pending RESET preempts instruction flow; otherwise cycle 0
    /// fetches the next opcode and later cycles run the decoded
    /// driver until it reports completion.
    pub fn tick(&mut self, bus: &mut dyn Bus) {
        if self.intr & Interrupt::Reset as u8 != 0 {
            if self.cycle == 0 {
                // The interrupted instruction's pipeline slot; the chip
                // does nothing visible here.
                self.cycle += 1;
                return;
            }

            if control::reset(self, bus) {
                self.cycle = 0;
            } else {
                self.cycle += 1;
            }

            return;
        }

        if self.cycle == 0 {
            self.opc = bus.read(self.pc);
            self.pc = self.pc.wrapping_add(1);
            self.cycle = 1;
            return;
        }

        let done = match INSTRUCTIONS[self.opc as usize].driver {
            Driver::Immediate => modes::immediate(self, bus),
            Driver::Implied => modes::implied(self, bus),
            Driver::Accumulator => modes::accumulator(self, bus),
            Driver::ZeroPage => modes::zero_page(self, bus),
            Driver::ZeroPageX => modes::zero_page_x(self, bus),
            Driver::ZeroPageY => modes::zero_page_y(self, bus),
            Driver::Absolute => modes::absolute(self, bus),
            Driver::AbsoluteX => modes::absolute_x(self, bus),
            Driver::AbsoluteY => modes::absolute_y(self, bus),
            Driver::IndirectX => modes::indirect_x(self, bus),
            Driver::IndirectY => modes::indirect_y(self, bus),
            Driver::Relative => modes::relative(self, bus),
            Driver::Brk => control::brk(self, bus),
            Driver::Rti => control::rti(self, bus),
            Driver::Php => control::php(self, bus),
            Driver::Plp => control::plp(self, bus),
            Driver::Pha => control::pha(self, bus),
            Driver::Pla => control::pla(self, bus),
            Driver::Jsr => control::jsr(self, bus),
            Driver::Rts => control::rts(self, bus),
            Driver::JmpAbsolute => control::jmp_absolute(self, bus),
            Driver::JmpIndirect => control::jmp_indirect(self, bus),
            Driver::Illegal => true,
        };

        if done {
            self.cycle = 0;
        } else {
            self.cycle += 1;
        }
    }

    /// Run one full instruction: tick until the micro-cycle counter
    /// comes back to zero.
    pub fn step(&mut self, bus: &mut dyn Bus) {
        loop {
            self.tick(bus);
            if self.cycle == 0 {
                break;
            }
        }
    }

    /// Step whole instructions until the predicate holds. Useful for
    /// harnesses ("run until the interrupt-disable flag is set").
    pub fn run_until<F>(&mut self, bus: &mut dyn Bus, predicate: F)
    where
        F: Fn(&Cpu6502) -> bool,
    {
        while !predicate(self) {
            self.step(bus);
        }
    }

    /// Raise an interrupt request line. RESET is serviced by the next
    /// tick; NMI and IRQ merely stay visible in `intr`.
    pub fn request_interrupt(&mut self, interrupt: Interrupt) {
        self.intr |= interrupt as u8;
    }

    pub fn set_status_flag(&mut self, flag: StatusFlag, value: bool) {
        if value {
            self.p |= flag as u8;
        } else {
            self.p &= !(flag as u8);
        }
    }

    pub fn is_status_flag_set(&self, flag: StatusFlag) -> bool {
        self.p & flag as u8 != 0
    }

    /// Every ALU action leaves Z and N describing its result byte.
    fn update_zero_and_negative_flag(&mut self, value: u8) {
        self.set_status_flag(StatusFlag::Zero, value == 0);
        self.set_status_flag(StatusFlag::Negative, value & 0x80 != 0);
    }

    /// Carry-in for the adder, as 0 or 1.
    fn get_carry(&self) -> u8 {
        self.is_status_flag_set(StatusFlag::Carry) as u8
    }

    fn push_stack(&mut self, bus: &mut dyn Bus, data: u8) {
        bus.write(STACK_PAGE | self.sp as u16, data);
        self.sp = self.sp.wrapping_sub(1);
    }

    fn pop_stack(&mut self, bus: &mut dyn Bus) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        bus.read(STACK_PAGE | self.sp as u16)
    }

    /// Read the byte under the stack pointer without moving it. The
    /// real chip does this on the dead cycle of every pull and of JSR.
    fn peek_stack(&mut self, bus: &mut dyn Bus) -> u8 {
        bus.read(STACK_PAGE | self.sp as u16)
    }

    /// The access-kind tag of the in-flight opcode.
    fn access(&self) -> Access {
        INSTRUCTIONS[self.opc as usize].access
    }

    /// Run the in-flight opcode's ALU action. Drivers call this on the
    /// cycle where the real chip's ALU result becomes visible.
    fn run_action(&mut self) {
        match INSTRUCTIONS[self.opc as usize].action {
            Action::Ora => logical::ora(self),
            Action::And => logical::and(self),
            Action::Eor => logical::eor(self),
            Action::Adc => logical::adc(self),
            Action::Sbc => logical::sbc(self),
            Action::Cmp => logical::cmp(self),
            Action::Cpx => logical::cpx(self),
            Action::Cpy => logical::cpy(self),
            Action::Dec => logical::dec(self),
            Action::Dex => logical::dex(self),
            Action::Dey => logical::dey(self),
            Action::Inc => logical::inc(self),
            Action::Inx => logical::inx(self),
            Action::Iny => logical::iny(self),
            Action::Asl => logical::asl(self),
            Action::Rol => logical::rol(self),
            Action::Lsr => logical::lsr(self),
            Action::Ror => logical::ror(self),
            Action::Lda => moves::lda(self),
            Action::Ldx => moves::ldx(self),
            Action::Ldy => moves::ldy(self),
            Action::Sta => moves::sta(self),
            Action::Stx => moves::stx(self),
            Action::Sty => moves::sty(self),
            Action::Tax => moves::tax(self),
            Action::Tay => moves::tay(self),
            Action::Txa => moves::txa(self),
            Action::Tya => moves::tya(self),
            Action::Tsx => moves::tsx(self),
            Action::Txs => moves::txs(self),
            Action::Bpl => flags::bpl(self),
            Action::Bmi => flags::bmi(self),
            Action::Bvc => flags::bvc(self),
            Action::Bvs => flags::bvs(self),
            Action::Bcc => flags::bcc(self),
            Action::Bcs => flags::bcs(self),
            Action::Bne => flags::bne(self),
            Action::Beq => flags::beq(self),
            Action::Clc => flags::clc(self),
            Action::Cld => flags::cld(self),
            Action::Cli => flags::cli(self),
            Action::Clv => flags::clv(self),
            Action::Sec => flags::sec(self),
            Action::Sed => flags::sed(self),
            Action::Sei => flags::sei(self),
            Action::Bit => flags::bit(self),
            Action::Nop => flags::nop(self),
        }
    }
}
