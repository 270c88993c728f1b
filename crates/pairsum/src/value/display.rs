//! Display and Debug implementations for Value

use std::fmt;

use super::*;

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value], debug: bool) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        if debug {
            write!(f, "{:?}", item)?;
        } else {
            write!(f, "{}", item)?;
        }
    }
    Ok(())
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "()"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Char(c) => write!(f, "'{}'", c),

            Value::I8(n) => write!(f, "{}i8", n),
            Value::I16(n) => write!(f, "{}i16", n),
            Value::I32(n) => write!(f, "{}i32", n),
            Value::I64(n) => write!(f, "{}", n), // Default integer type
            Value::I128(n) => write!(f, "{}i128", n),
            Value::Isize(n) => write!(f, "{}isize", n),

            Value::U8(n) => write!(f, "{}u8", n),
            Value::U16(n) => write!(f, "{}u16", n),
            Value::U32(n) => write!(f, "{}u32", n),
            Value::U64(n) => write!(f, "{}u64", n),
            Value::U128(n) => write!(f, "{}u128", n),
            Value::Usize(n) => write!(f, "{}usize", n),

            Value::F32(n) => write!(f, "{}f32", n),
            Value::F64(n) => write!(f, "{}", n), // Default float type

            Value::String(s) => write!(f, "{:?}", s.as_ref()),

            Value::Vec(items) => {
                write!(f, "vec![")?;
                write_items(f, items, true)?;
                write!(f, "]")
            }

            Value::Tuple(items) => {
                write!(f, "(")?;
                write_items(f, items, true)?;
                if items.len() == 1 {
                    write!(f, ",")?; // Single-element tuple needs trailing comma
                }
                write!(f, ")")
            }

            Value::Array(items) => {
                write!(f, "[")?;
                write_items(f, items, true)?;
                write!(f, "]")
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::I8(n) => write!(f, "{}", n),
            Value::I16(n) => write!(f, "{}", n),
            Value::I32(n) => write!(f, "{}", n),
            Value::I128(n) => write!(f, "{}", n),
            Value::Isize(n) => write!(f, "{}", n),
            Value::U8(n) => write!(f, "{}", n),
            Value::U16(n) => write!(f, "{}", n),
            Value::U32(n) => write!(f, "{}", n),
            Value::U64(n) => write!(f, "{}", n),
            Value::U128(n) => write!(f, "{}", n),
            Value::Usize(n) => write!(f, "{}", n),
            Value::F32(n) => write!(f, "{}", n),
            Value::Char(c) => write!(f, "{}", c),
            Value::String(s) => write!(f, "{}", s),

            Value::Vec(items) | Value::Array(items) => {
                write!(f, "[")?;
                write_items(f, items, false)?;
                write!(f, "]")
            }

            Value::Tuple(items) => {
                write!(f, "(")?;
                write_items(f, items, false)?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }

            // Unit, Bool, I64, F64 render the same either way
            other => write!(f, "{:?}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_suffixes() {
        assert_eq!(format!("{:?}", Value::I64(3)), "3");
        assert_eq!(format!("{:?}", Value::U8(3)), "3u8");
        assert_eq!(format!("{:?}", Value::ints(&[1, 2])), "vec![1, 2]");
    }

    #[test]
    fn test_display_plain() {
        let v = Value::vec(vec![Value::Usize(0), Value::Usize(1)]);
        assert_eq!(v.to_string(), "[0, 1]");
        assert_eq!(Value::tuple(vec![Value::U8(5)]).to_string(), "(5,)");
        assert_eq!(Value::string("x").to_string(), "x");
    }
}
