use std::io::Write;

use crate::error::Result;

// ============================================================================
// Part 1: Basic reference on an integer
// ============================================================================

pub fn demonstrate_basic_int_pointer(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "=== demonstrate_basic_int_pointer ===")?;

    let mut user_number = 10;
    writeln!(out, "Initial value: {}", user_number)?;

    let pointer_to_user_number: &mut i32 = &mut user_number;
    writeln!(out, "Value via pointer: {}", *pointer_to_user_number)?;

    *pointer_to_user_number = 25; // write through the alias

    // The exclusive borrow ends above, so the owner can be read again.
    writeln!(out, "New value after dereferencing: {}", user_number)?;
    writeln!(out)?;
    Ok(())
}

// ============================================================================
// Part 2: Various pointer types
// ============================================================================

fn function_to_be_called_through_pointer(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Function called through function pointer.")?;
    Ok(())
}

pub fn demonstrate_various_pointer_types(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "=== demonstrate_various_pointer_types ===")?;

    let integer_value = 42;
    let pointer_to_integer_value: &i32 = &integer_value;
    writeln!(out, "Pointer to int: {}", *pointer_to_integer_value)?;

    let character_value = 'A';
    let pointer_to_character_value: &char = &character_value;
    writeln!(out, "Pointer to char: {}", *pointer_to_character_value)?;

    // A slice is a pointer plus a length; indexing is the checked offset.
    let integer_array = [1, 2, 3];
    let pointer_to_integer_array: &[i32] = &integer_array;
    write!(out, "Pointer to array:")?;
    for index in 0..pointer_to_integer_array.len() {
        write!(out, " {}", pointer_to_integer_array[index])?;
    }
    writeln!(out)?;

    let array_of_words: [&'static str; 3] = ["Hello", "World", "Pointers"];
    writeln!(out, "Array of pointers:")?;
    for word in array_of_words {
        writeln!(out, "  {}", word)?;
    }

    let pointer_to_first_element: &i32 = &integer_array[0];
    let pointer_to_pointer: &&i32 = &pointer_to_first_element;
    writeln!(out, "Pointer to pointer: {}", **pointer_to_pointer)?;

    let pointer_to_function: fn(&mut dyn Write) -> Result<()> =
        function_to_be_called_through_pointer;
    pointer_to_function(out)?;

    writeln!(out)?;
    Ok(())
}

// ============================================================================
// Part 3: Rebinding vs. mutation
// ============================================================================

/// Three alias shapes over two integers:
///
/// | binding          | rebind | mutate target |
/// |------------------|--------|---------------|
/// | `let mut p: &i32`| yes    | no            |
/// | `let p: &mut i32`| no     | yes           |
/// | `let p: &i32`    | no     | no            |
#[allow(unused_assignments)]
pub fn demonstrate_const_pointer_cases(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "=== demonstrate_const_pointer_cases ===")?;

    let first_number = 10;
    let mut second_number = 20;

    let mut pointer_to_constant_data: &i32 = &first_number;
    writeln!(out, "pointer_to_constant_data: {}", *pointer_to_constant_data)?;
    pointer_to_constant_data = &second_number;

    // Bound once; only the target changes. The 40 is never printed.
    let constant_pointer_to_data: &mut i32 = &mut second_number;
    *constant_pointer_to_data = 40;

    let constant_pointer_to_constant_data: &i32 = &first_number;
    writeln!(
        out,
        "constant_pointer_to_constant_data: {}",
        *constant_pointer_to_constant_data
    )?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(demo: fn(&mut dyn Write) -> Result<()>) -> String {
        let mut buffer = Vec::new();
        demo(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_basic_int_pointer_mutates_through_alias() {
        let output = capture(demonstrate_basic_int_pointer);
        assert_eq!(
            output,
            "=== demonstrate_basic_int_pointer ===\n\
             Initial value: 10\n\
             Value via pointer: 10\n\
             New value after dereferencing: 25\n\
             \n"
        );
    }

    #[test]
    fn test_various_pointer_types_output() {
        let output = capture(demonstrate_various_pointer_types);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "=== demonstrate_various_pointer_types ===");
        assert_eq!(lines[1], "Pointer to int: 42");
        assert_eq!(lines[2], "Pointer to char: A");
        assert_eq!(lines[3], "Pointer to array: 1 2 3");
        assert_eq!(lines[4], "Array of pointers:");
        assert_eq!(&lines[5..8], &["  Hello", "  World", "  Pointers"]);
        assert_eq!(lines[8], "Pointer to pointer: 1");
        assert_eq!(lines[9], "Function called through function pointer.");
        assert_eq!(lines[10], "");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_function_pointer_prints_once() {
        let output = capture(demonstrate_various_pointer_types);
        assert_eq!(output.matches("Function called through").count(), 1);
        assert!(output.ends_with("Function called through function pointer.\n\n"));
    }

    #[test]
    fn test_const_pointer_cases_never_show_forty() {
        let output = capture(demonstrate_const_pointer_cases);
        assert_eq!(
            output,
            "=== demonstrate_const_pointer_cases ===\n\
             pointer_to_constant_data: 10\n\
             constant_pointer_to_constant_data: 10\n\
             \n"
        );
        assert!(!output.contains("40"));
    }
}
