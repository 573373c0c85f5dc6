use core::panic;

use array2d::Array2D;

#[derive(Debug, Clone)]
pub struct Matrix<T>(pub(super) Array2D<T>);

impl<T> Matrix<T> {
    pub fn get(&self, row: usize, column: usize) -> &T {
        match self.0.get(row, column) {
            Some(element) => element,
            None => panic!(
                "Attempted to access matrix element ({}, {}), but matrix has shape ({}, {})",
                row,
                column,
                &self.0.num_rows(),
                &self.0.num_columns()
            ),
        }
    }

    pub fn set(&mut self, row: usize, column: usize, value: T) {
        match self.0.set(row, column, value) {
            Ok(_) => (),
            Err(msg) => panic!(
                "Attempted to set matrix element ({}, {}), but encountered following error: {}",
                row, column, msg,
            ),
        }
    }

    pub fn from_rows(rows: &Vec<Vec<T>>) -> Self
    where
        T: Clone,
    {
        match Array2D::from_rows(rows) {
            Ok(matrix) => Matrix(matrix),
            Err(msg) => panic!(
                "An error occurred while attempting to create a Matrix from rows: {}",
                msg
            ),
        }
    }

    pub fn filled_with(value: T, rows: usize, columns: usize) -> Self
    where
        T: Clone,
    {
        Matrix(Array2D::filled_with(value, rows, columns))
    }

    pub fn from_elements(elements: &Vec<T>, rows: usize, columns: usize) -> Self
    where
        T: Clone,
    {
        match Array2D::from_row_major(elements, rows, columns) {
            Ok(matrix) => Matrix(matrix),
            Err(msg) => panic!(
                "An error occurred while attempting to create a ({}, {}) matrix from a row: {}",
                rows, columns, msg
            ),
        }
    }

    pub fn as_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.0.as_rows()
    }

    pub fn as_columns(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.0.as_columns()
    }

    pub fn indices(&self) -> impl DoubleEndedIterator + Iterator<Item = (usize, usize)> + Clone {
        self.0.indices_row_major()
    }

    pub fn elements(&self) -> impl DoubleEndedIterator<Item = &T> + Clone {
        self.0.elements_row_major_iter()
    }

    pub fn rows_iter(
        &self,
    ) -> impl DoubleEndedIterator
           + Iterator<Item = impl DoubleEndedIterator + Iterator<Item = &T> + Clone>
           + Clone {
        self.0.rows_iter()
    }

    pub fn num_rows(&self) -> usize {
        self.0.num_rows()
    }

    pub fn num_columns(&self) -> usize {
        self.0.num_columns()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get() {
        let mut matrix: Matrix<i64> = Matrix::filled_with(0, 3, 3);
        matrix.set(1, 2, 42);
        assert_eq!(42, *matrix.get(1, 2));
        assert_eq!(0, *matrix.get(2, 1));
    }

    #[test]
    fn test_from_rows_matches_from_elements() {
        let from_rows: Matrix<i64> = Matrix::from_rows(&vec![vec![1, 2], vec![3, 4]]);
        let from_elements: Matrix<i64> = Matrix::from_elements(&vec![1, 2, 3, 4], 2, 2);
        assert_eq!(from_rows, from_elements);
    }

    #[test]
    fn test_as_columns() {
        let matrix: Matrix<i64> = Matrix::from_elements(&vec![1, 2, 3, 4], 2, 2);
        assert_eq!(vec![vec![1, 3], vec![2, 4]], matrix.as_columns());
    }
}
