use std::io::Write;

use crate::arithmetic::demonstrate_pointer_arithmetic;
use crate::basics::{
    demonstrate_basic_int_pointer, demonstrate_const_pointer_cases,
    demonstrate_various_pointer_types,
};
use crate::error::Result;
use crate::hazards::demonstrate_pointer_dangers;
use crate::student::{
    demonstrate_student_allocation_with_box, demonstrate_student_allocation_with_raw_alloc,
};

/// A named demo routine.
#[derive(Clone, Copy)]
pub struct Demo {
    pub name: &'static str,
    pub run: fn(&mut dyn Write) -> Result<()>,
}

/// Run order. Each routine prints its own `=== name ===` header.
pub const DEMOS: [Demo; 7] = [
    Demo { name: "demonstrate_basic_int_pointer", run: demonstrate_basic_int_pointer },
    Demo { name: "demonstrate_various_pointer_types", run: demonstrate_various_pointer_types },
    Demo { name: "demonstrate_const_pointer_cases", run: demonstrate_const_pointer_cases },
    Demo {
        name: "demonstrate_student_allocation_with_raw_alloc",
        run: demonstrate_student_allocation_with_raw_alloc,
    },
    Demo {
        name: "demonstrate_student_allocation_with_box",
        run: demonstrate_student_allocation_with_box,
    },
    Demo { name: "demonstrate_pointer_arithmetic", run: demonstrate_pointer_arithmetic },
    Demo { name: "demonstrate_pointer_dangers", run: demonstrate_pointer_dangers },
];

/// Runs every demo in order and returns how many ran.
pub fn run_all(out: &mut dyn Write) -> Result<usize> {
    for demo in &DEMOS {
        (demo.run)(out)?;
    }
    out.flush()?;
    Ok(DEMOS.len())
}
