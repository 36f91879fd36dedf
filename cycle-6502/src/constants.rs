use crate::cpu_6502::Interrupt;

/// Where each interrupt line fetches its handler address from. The
/// two-byte vectors sit at the very top of the address space; BRK
/// shares the IRQ slot.
pub const fn vector_address(interrupt: Interrupt) -> u16 {
    match interrupt {
        Interrupt::Nmi => 0xfffa,
        Interrupt::Reset => 0xfffc,
        Interrupt::Irq => 0xfffe,
    }
}

/// The stack is hardwired to page one; the stack pointer supplies the
/// low byte of every stack access.
pub const STACK_PAGE: u16 = 0x0100;
