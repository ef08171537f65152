//! CPU register snapshot and raw memory access
//!
//! One accessor routine per general-purpose register, so each value is
//! read before the compiler can reuse the register for anything else.
//! High registers are moved through a low destination, matching the
//! Cortex-M0+ MOV encoding. sp, lr and pc come from the cortex-m
//! register accessors.

use cortex_m::register;

use takt_core::traits::{Introspect, RegisterFile};

/// Cortex-M implementation of the register and memory probe.
pub struct CortexMProbe;

macro_rules! gpr_reader {
    ($name:ident, $insn:literal) => {
        #[inline(never)]
        fn $name() -> u32 {
            let value: u32;
            // SAFETY: a single register move with no memory or stack
            // effects.
            unsafe {
                core::arch::asm!(
                    $insn,
                    out(reg) value,
                    options(nomem, nostack, preserves_flags)
                );
            }
            value
        }
    };
}

gpr_reader!(read_r0, "mov {0}, r0");
gpr_reader!(read_r1, "mov {0}, r1");
gpr_reader!(read_r2, "mov {0}, r2");
gpr_reader!(read_r3, "mov {0}, r3");
gpr_reader!(read_r4, "mov {0}, r4");
gpr_reader!(read_r5, "mov {0}, r5");
gpr_reader!(read_r6, "mov {0}, r6");
gpr_reader!(read_r7, "mov {0}, r7");
gpr_reader!(read_r8, "mov {0}, r8");
gpr_reader!(read_r9, "mov {0}, r9");
gpr_reader!(read_r10, "mov {0}, r10");
gpr_reader!(read_r11, "mov {0}, r11");
gpr_reader!(read_r12, "mov {0}, r12");

impl Introspect for CortexMProbe {
    fn snapshot(&mut self) -> RegisterFile {
        RegisterFile {
            gpr: [
                read_r0(),
                read_r1(),
                read_r2(),
                read_r3(),
                read_r4(),
                read_r5(),
                read_r6(),
                read_r7(),
                read_r8(),
                read_r9(),
                read_r10(),
                read_r11(),
                read_r12(),
            ],
            sp: register::msp::read(),
            lr: register::lr::read(),
            pc: register::pc::read(),
        }
    }

    fn read_word(&self, addr: u32) -> u32 {
        // Word accesses must be aligned on this core; the operator's
        // address is masked down rather than faulting.
        unsafe { core::ptr::read_volatile((addr & !0x3) as *const u32) }
    }
}
