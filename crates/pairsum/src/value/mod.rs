//! Value representation for dynamically-typed arguments

mod display;
mod impls;

use std::sync::Arc;

/// Dynamically-typed argument accepted by the validating layer.
///
/// Values are organized into two tiers:
/// - Tier 1: Inline primitives (no allocation)
/// - Tier 2: Heap-allocated sequences and strings (Arc-wrapped)
#[derive(Clone)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Tier 1: Inline Primitives
    // ═══════════════════════════════════════════════════════════════════
    /// The unit type `()`
    Unit,

    /// Boolean: `true` or `false`
    Bool(bool),

    /// Unicode scalar value
    Char(char),

    // Signed integers
    /// 8-bit signed integer
    I8(i8),
    /// 16-bit signed integer
    I16(i16),
    /// 32-bit signed integer
    I32(i32),
    /// 64-bit signed integer (default integer type)
    I64(i64),
    /// 128-bit signed integer
    I128(i128),
    /// Pointer-sized signed integer
    Isize(isize),

    // Unsigned integers
    /// 8-bit unsigned integer
    U8(u8),
    /// 16-bit unsigned integer
    U16(u16),
    /// 32-bit unsigned integer
    U32(u32),
    /// 64-bit unsigned integer
    U64(u64),
    /// 128-bit unsigned integer
    U128(u128),
    /// Pointer-sized unsigned integer
    Usize(usize),

    // Floating point
    /// 32-bit floating point
    F32(f32),
    /// 64-bit floating point (default float type)
    F64(f64),

    // ═══════════════════════════════════════════════════════════════════
    // Tier 2: Heap-Allocated Types
    // ═══════════════════════════════════════════════════════════════════
    /// Heap-allocated string
    String(Arc<String>),

    /// Growable sequence
    Vec(Arc<Vec<Value>>),

    /// Tuple (heterogeneous, fixed-size)
    Tuple(Arc<Vec<Value>>),

    /// Array (fixed-size, but we represent as Vec internally)
    Array(Arc<Vec<Value>>),
}
