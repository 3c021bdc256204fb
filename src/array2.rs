/// Dense row-major matrix, indexed by `(row, col)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Array2<T> {
    pub vec: Vec<T>,
    pub rows: usize,
    pub cols: usize,
}

impl<T> Array2<T> {
    pub fn new(rows: usize, cols: usize) -> Self
    where
        T: Default + Copy,
    {
        Self::filled(rows, cols, T::default())
    }

    pub fn filled(rows: usize, cols: usize, value: T) -> Self
    where
        T: Copy,
    {
        Self {
            vec: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.vec[row * self.cols..(row + 1) * self.cols]
    }
}

impl<T: Copy> Array2<T> {
    /// Allocates an n x n matrix with `value` everywhere except the diagonal,
    /// which holds `diagonal`.
    pub fn square(n: usize, value: T, diagonal: T) -> Self {
        let mut a = Self::filled(n, n, value);
        for i in 0..n {
            a[(i, i)] = diagonal;
        }
        a
    }

    /// Writes `value` at `(i, j)` and at `(j, i)`.
    pub fn set_symmetric(&mut self, i: usize, j: usize, value: T) {
        self[(i, j)] = value;
        self[(j, i)] = value;
    }
}

// (row, column)
impl<T> core::ops::Index<(usize, usize)> for Array2<T> {
    type Output = T;
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(col < self.cols);
        &self.vec[row * self.cols + col]
    }
}

// (row, column)
impl<T> core::ops::IndexMut<(usize, usize)> for Array2<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(col < self.cols);
        &mut self.vec[row * self.cols + col]
    }
}
