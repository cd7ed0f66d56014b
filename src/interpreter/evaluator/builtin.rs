use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, registry::NativeFn},
        value::{Type, Value},
    },
    util::num::int_to_float,
};

/// The longest string, in bytes, that concatenation or repetition may build.
pub const MAX_STRING_LEN: usize = 1 << 24;

/// Defines the seeded operator overloads as a static table.
///
/// Each entry provides:
/// - the registry name,
/// - the parameter types that select the overload,
/// - the return type,
/// - a function pointer implementing it.
///
/// The macro produces `BuiltinDef` (the row type) and `BUILTIN_TABLE`.
macro_rules! builtin_overloads {
    (
        $(
            $name:literal ( $($param:ident),* ) -> $ret:ident => $func:expr
        ),* $(,)?
    ) => {
        pub(crate) struct BuiltinDef {
            pub name:        &'static str,
            pub params:      &'static [Type],
            pub return_type: Type,
            pub func:        NativeFn,
        }
        pub(crate) static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name:        $name,
                             params:      &[$(Type::$param),*],
                             return_type: Type::$ret,
                             func:        $func },
            )*
        ];
    };
}

builtin_overloads! {
    "op_Add"      (Integer, Integer) -> Integer => add,
    "op_Add"      (Float, Float)     -> Float   => add,
    "op_Add"      (Float, Integer)   -> Float   => add,
    "op_Add"      (Integer, Float)   -> Float   => add,
    "op_Add"      (String, Object)   -> String  => concat,
    "op_Subtract" (Integer, Integer) -> Integer => subtract,
    "op_Subtract" (Float, Float)     -> Float   => subtract,
    "op_Subtract" (Float, Integer)   -> Float   => subtract,
    "op_Subtract" (Integer, Float)   -> Float   => subtract,
    "op_Multiply" (Integer, Integer) -> Integer => multiply,
    "op_Multiply" (Float, Float)     -> Float   => multiply,
    "op_Multiply" (Float, Integer)   -> Float   => multiply,
    "op_Multiply" (Integer, Float)   -> Float   => multiply,
    "op_Multiply" (String, Object)   -> String  => repeat,
    "op_Divide"   (Integer, Integer) -> Integer => divide,
    "op_Divide"   (Float, Float)     -> Float   => divide,
    "op_Divide"   (Float, Integer)   -> Float   => divide,
    "op_Divide"   (Integer, Float)   -> Float   => divide,
    "op_Negate"   (Integer)          -> Integer => negate,
    "op_Negate"   (Float)            -> Float   => negate,
}

/// Splits the arguments of a binary overload.
fn operands(args: &[Value], line: usize) -> EvalResult<(&Value, &Value)> {
    match args {
        [left, right] => Ok((left, right)),
        _ => Err(RuntimeError::TypeError { details: format!("expected 2 operands, got {}",
                                                            args.len()),
                                           line }),
    }
}

/// Applies a numeric operator to two operands.
///
/// Two integers use the checked integer operation; any other numeric pair is
/// computed in floating point, converting the integer side exactly.
fn arithmetic(args: &[Value],
              line: usize,
              int_op: fn(i64, i64) -> Option<i64>,
              float_op: fn(f64, f64) -> f64)
              -> EvalResult<Value> {
    let (left, right) = operands(args, line)?;
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => {
            int_op(*a, *b).map(Value::Integer).ok_or(RuntimeError::Overflow { line })
        },
        (Value::Float(a), Value::Float(b)) => Ok(Value::Float(float_op(*a, *b))),
        (Value::Float(a), Value::Integer(b)) => Ok(Value::Float(float_op(*a, int_to_float(*b, line)?))),
        (Value::Integer(a), Value::Float(b)) => Ok(Value::Float(float_op(int_to_float(*a, line)?, *b))),
        _ => Err(RuntimeError::TypeError { details: format!("expected numbers, found {} and {}",
                                                            left.type_of(),
                                                            right.type_of()),
                                           line }),
    }
}

/// Rejects a string result longer than [`MAX_STRING_LEN`] bytes.
fn check_length(length: usize, line: usize) -> EvalResult<()> {
    if length > MAX_STRING_LEN {
        return Err(RuntimeError::StringTooLong { limit: MAX_STRING_LEN,
                                                 line });
    }
    Ok(())
}

fn add(args: &[Value], line: usize) -> EvalResult<Value> {
    arithmetic(args, line, i64::checked_add, |a, b| a + b)
}

fn subtract(args: &[Value], line: usize) -> EvalResult<Value> {
    arithmetic(args, line, i64::checked_sub, |a, b| a - b)
}

fn multiply(args: &[Value], line: usize) -> EvalResult<Value> {
    arithmetic(args, line, i64::checked_mul, |a, b| a * b)
}

/// Division truncates for two integers; a zero divisor is an error for
/// integers and floats alike.
fn divide(args: &[Value], line: usize) -> EvalResult<Value> {
    let (_, divisor) = operands(args, line)?;
    match divisor {
        Value::Integer(0) => return Err(RuntimeError::DivisionByZero { line }),
        Value::Float(x) if *x == 0.0 => return Err(RuntimeError::DivisionByZero { line }),
        _ => {},
    }
    arithmetic(args, line, i64::checked_div, |a, b| a / b)
}

/// Appends the display form of any value to a string.
fn concat(args: &[Value], line: usize) -> EvalResult<Value> {
    match operands(args, line)? {
        (Value::Str(s), other) => {
            let joined = format!("{s}{other}");
            check_length(joined.len(), line)?;
            Ok(Value::Str(joined))
        },
        (other, _) => Err(RuntimeError::TypeError { details: format!("expected string, found {}",
                                                                     other.type_of()),
                                                    line }),
    }
}

/// Repeats a string; a count below one yields the empty string.
fn repeat(args: &[Value], line: usize) -> EvalResult<Value> {
    match operands(args, line)? {
        (Value::Str(s), Value::Integer(n)) => {
            let count = usize::try_from(*n).unwrap_or(0);
            let length = s.len().checked_mul(count).unwrap_or(usize::MAX);
            check_length(length, line)?;
            Ok(Value::Str(s.repeat(count)))
        },
        (Value::Str(_), other) => {
            Err(RuntimeError::TypeError { details: format!("a string can only be repeated an int number of times, found {}",
                                                           other.type_of()),
                                          line })
        },
        (other, _) => Err(RuntimeError::TypeError { details: format!("expected string, found {}",
                                                                     other.type_of()),
                                                    line }),
    }
}

fn negate(args: &[Value], line: usize) -> EvalResult<Value> {
    match args {
        [Value::Integer(n)] => n.checked_neg().map(Value::Integer).ok_or(RuntimeError::Overflow { line }),
        [Value::Float(x)] => Ok(Value::Float(-x)),
        _ => Err(RuntimeError::TypeError { details: "expected one number".to_string(),
                                           line }),
    }
}
