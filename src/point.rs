use std::ops::{
    Add,
    Sub,
    Mul,
    Div
};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point2<T>
{
    pub x: T,
    pub y: T
}

impl<T> Point2<T>
{
    pub fn new(x: T, y: T) -> Self
    {
        Self{x, y}
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Point2<U>
    {
        Point2{
            x: f(self.x),
            y: f(self.y)
        }
    }
}

impl<T: PartialOrd + Copy> Point2<T>
{
    /// componentwise minimum
    pub fn min(self, other: Self) -> Self
    {
        Self{
            x: if other.x < self.x { other.x } else { self.x },
            y: if other.y < self.y { other.y } else { self.y }
        }
    }

    pub fn max(self, other: Self) -> Self
    {
        Self{
            x: if other.x > self.x { other.x } else { self.x },
            y: if other.y > self.y { other.y } else { self.y }
        }
    }
}

impl Point2<f64>
{
    pub fn tuple(self) -> (f64, f64)
    {
        (self.x, self.y)
    }
}

impl From<Point2<i32>> for Point2<f64>
{
    fn from(point: Point2<i32>) -> Self
    {
        point.map(f64::from)
    }
}

macro_rules! op_impl
{
    ($op_trait:ident, $op_fn:ident) =>
    {
        impl<T: $op_trait<Output=T>> $op_trait<Point2<T>> for Point2<T>
        {
            type Output = Point2<T>;

            fn $op_fn(self, rhs: Point2<T>) -> Self::Output
            {
                Point2{
                    x: self.x.$op_fn(rhs.x),
                    y: self.y.$op_fn(rhs.y)
                }
            }
        }
    }
}

macro_rules! op_impl_scalar
{
    ($op_trait:ident, $op_fn:ident) =>
    {
        impl<T: $op_trait<Output=T> + Clone> $op_trait<T> for Point2<T>
        {
            type Output = Point2<T>;

            fn $op_fn(self, rhs: T) -> Self::Output
            {
                Point2{
                    x: self.x.$op_fn(rhs.clone()),
                    y: self.y.$op_fn(rhs)
                }
            }
        }
    }
}

op_impl!{Add, add}
op_impl!{Sub, sub}
op_impl!{Mul, mul}
op_impl!{Div, div}

op_impl_scalar!{Add, add}
op_impl_scalar!{Mul, mul}
op_impl_scalar!{Div, div}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn componentwise_bounds()
    {
        let a = Point2::new(3, -1);
        let b = Point2::new(-2, 5);

        assert_eq!(a.min(b), Point2::new(-2, -1));
        assert_eq!(a.max(b), Point2::new(3, 5));
    }

    #[test]
    fn arithmetic()
    {
        let p: Point2<f64> = Point2::new(2_i32, 4).into();

        assert_eq!((p - Point2::new(1.0, 1.0)) / Point2::new(1.0, 3.0), Point2::new(1.0, 1.0));
        assert_eq!(p * 0.5 + 1.0, Point2::new(2.0, 3.0));
    }
}
