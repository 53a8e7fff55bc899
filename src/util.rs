pub use point::Point;
pub use size::Size;

mod size {
    /// Width and height in device units.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct Size<I>
    where
        I: num_traits::PrimInt + num_traits::Zero,
    {
        pub width: I,
        pub height: I,
    }

    impl<I> Size<I>
    where
        I: num_traits::PrimInt + num_traits::Zero,
    {
        pub fn new(width: I, height: I) -> Self {
            Self { width, height }
        }

        pub fn as_tuple(&self) -> (I, I) {
            (self.width, self.height)
        }
    }
}

mod point {
    /// A position relative to the origin of a drawable.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct Point<I>
    where
        I: num_traits::PrimInt + num_traits::Zero,
    {
        pub x: I,
        pub y: I,
    }

    impl<I> Point<I>
    where
        I: num_traits::PrimInt + num_traits::Zero,
    {
        pub fn new(x: I, y: I) -> Self {
            Self { x, y }
        }

        pub fn as_tuple(&self) -> (I, I) {
            (self.x, self.y)
        }
    }
}
