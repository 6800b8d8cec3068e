use std::io::Write;

use crate::error::Result;

/// One category of pointer misuse, kept as text only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hazard {
    pub title: &'static str,
    pub pattern: &'static [&'static str],
}

/// Nothing here is ever compiled as code.
pub const HAZARDS: [Hazard; 7] = [
    Hazard {
        title: "Uninitialized pointer dereference",
        pattern: &["let p: *mut i32 = MaybeUninit::uninit().assume_init(); // *p = 10; // UB"],
    },
    Hazard {
        title: "Null pointer dereference",
        pattern: &["let p: *mut i32 = ptr::null_mut(); // *p = 10; // UB"],
    },
    Hazard {
        title: "Use-after-free",
        pattern: &["let p = alloc(layout) as *mut i32; dealloc(p as *mut u8, layout); // *p = 10; // UB"],
    },
    Hazard {
        title: "Double free",
        pattern: &["dealloc(p, layout); dealloc(p, layout); // UB"],
    },
    Hazard {
        title: "Buffer overflow",
        pattern: &["let mut arr = [0i32; 3]; // *arr.as_mut_ptr().add(3) = 10; // UB"],
    },
    Hazard {
        title: "Invalid pointer arithmetic",
        pattern: &["// *p.add(10); // UB"],
    },
    Hazard {
        title: "Type-punning aliasing violation",
        pattern: &["let d = 1.0f64; let p = &d as *const f64 as *mut i64; // *p = 10; // UB"],
    },
];

pub fn demonstrate_pointer_dangers(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "=== demonstrate_pointer_dangers ===")?;
    writeln!(out, "Examples shown as commented code to avoid UB.")?;
    writeln!(out)?;

    for (number, hazard) in HAZARDS.iter().enumerate() {
        writeln!(out, "{}) {}", number + 1, hazard.title)?;
        for line in hazard.pattern {
            writeln!(out, "   {}", line)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
