//! Points that can be appended to a series.
//!
//! A point is printed as one line of space-separated numbers; gnuplot picks
//! the columns it needs (2 for `x y`, more for error bars and the like).

use std::fmt::{self, Write};

mod sealed {
    pub trait Sealed {}
}

/// A primitive number that can be written into a data line.
pub trait Number: Copy + fmt::Display + sealed::Sealed {}

/// One row of values.
pub trait DataPoint {
    /// Append the values, space separated, to `out`.
    fn write_values(&self, out: &mut String) -> fmt::Result;
}

macro_rules! number {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Number for $ty {}

            impl DataPoint for $ty {
                fn write_values(&self, out: &mut String) -> fmt::Result {
                    write!(out, "{self}")
                }
            }
        )*
    };
}

number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

macro_rules! tuple_point {
    ($first_ty:ident $first:ident $(, $ty:ident $value:ident)*) => {
        impl<$first_ty: Number $(, $ty: Number)*> DataPoint for ($first_ty, $($ty,)*) {
            fn write_values(&self, out: &mut String) -> fmt::Result {
                let ($first, $($value,)*) = *self;
                write!(out, "{}", $first)?;
                $(write!(out, " {}", $value)?;)*
                Ok(())
            }
        }
    };
}

tuple_point!(A a, B b);
tuple_point!(A a, B b, C c);
tuple_point!(A a, B b, C c, D d);
tuple_point!(A a, B b, C c, D d, E e);
tuple_point!(A a, B b, C c, D d, E e, F f);

impl<N: Number> DataPoint for [N] {
    fn write_values(&self, out: &mut String) -> fmt::Result {
        write_joined(out, self.iter().copied())
    }
}

impl<N: Number, const K: usize> DataPoint for [N; K] {
    fn write_values(&self, out: &mut String) -> fmt::Result {
        self.as_slice().write_values(out)
    }
}

impl<N: Number> DataPoint for Vec<N> {
    fn write_values(&self, out: &mut String) -> fmt::Result {
        self.as_slice().write_values(out)
    }
}

impl<T: DataPoint + ?Sized> DataPoint for &T {
    fn write_values(&self, out: &mut String) -> fmt::Result {
        (**self).write_values(out)
    }
}

fn write_joined<N: Number>(
    out: &mut String,
    values: impl IntoIterator<Item = N>,
) -> fmt::Result {
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write!(out, "{value}")?;
    }
    Ok(())
}

/// `print "<values>"` followed by a newline.
pub(crate) fn write_print_line<P: DataPoint + ?Sized>(out: &mut String, point: &P) -> fmt::Result {
    out.push_str("print \"");
    point.write_values(out)?;
    out.push_str("\"\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line<P: DataPoint + ?Sized>(point: &P) -> String {
        let mut out = String::new();
        write_print_line(&mut out, point).unwrap();
        out
    }

    #[test]
    fn tuples_mix_integer_and_float_columns() {
        assert_eq!(line(&(0, 0.5)), "print \"0 0.5\"\n");
        assert_eq!(line(&(1u8, 2i64, -3.25f32)), "print \"1 2 -3.25\"\n");
        assert_eq!(line(&(1, 2, 3, 4, 5, 6)), "print \"1 2 3 4 5 6\"\n");
    }

    #[test]
    fn arrays_slices_and_vectors() {
        assert_eq!(line(&[1.5, 2.0]), "print \"1.5 2\"\n");
        assert_eq!(line(&[7u32, 8, 9][..]), "print \"7 8 9\"\n");
        assert_eq!(line(&vec![-1i32, 1]), "print \"-1 1\"\n");
        assert_eq!(line(&&(3, 4)), "print \"3 4\"\n");
    }

    #[test]
    fn single_value_is_one_column() {
        assert_eq!(line(&42u64), "print \"42\"\n");
    }
}
