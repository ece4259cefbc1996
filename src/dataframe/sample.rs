//! Built-in exercise dataset: twelve students with age, two course grades,
//! weekly study hours and a self-reported stress level.

use super::{DataFrame, Value};
use crate::error::Result;

pub const ID: &str = "ID";
pub const AGE: &str = "Age";
pub const MATH_GRADE: &str = "Math_Grade";
pub const STATS_GRADE: &str = "Stats_Grade";
pub const STUDY_HOURS: &str = "Study_Hours";
pub const STRESS_LEVEL: &str = "Stress_Level";

/// Numeric columns analyzed by the default report
pub const NUMERIC_COLUMNS: [&str; 5] = [AGE, MATH_GRADE, STATS_GRADE, STUDY_HOURS, STRESS_LEVEL];

// id, age, math, stats, hours, stress
const ROWS: [(i64, i64, f64, f64, i64, i64); 12] = [
    (1, 18, 3.5, 3.8, 10, 6),
    (2, 19, 4.0, 4.2, 12, 5),
    (3, 20, 2.8, 3.1, 6, 8),
    (4, 21, 3.2, 3.6, 8, 7),
    (5, 22, 4.5, 4.8, 15, 4),
    (6, 20, 3.7, 3.5, 9, 6),
    (7, 19, 2.9, 3.2, 7, 7),
    (8, 21, 3.8, 3.9, 11, 5),
    (9, 22, 4.1, 4.3, 13, 4),
    (10, 18, 2.5, 2.8, 5, 9),
    (11, 23, 4.6, 4.7, 16, 3),
    (12, 20, 3.3, 3.4, 8, 7),
];

/// The twelve-student dataset
pub fn student_dataset() -> Result<DataFrame> {
    let mut df = DataFrame::with_columns(vec![ID, AGE, MATH_GRADE, STATS_GRADE, STUDY_HOURS, STRESS_LEVEL])?;
    for (id, age, math, stats, hours, stress) in ROWS {
        df.push_row(vec![
            Value::Int(id),
            Value::Int(age),
            Value::Float(math),
            Value::Float(stats),
            Value::Int(hours),
            Value::Int(stress),
        ])?;
    }
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::ColumnKind;

    #[test]
    fn test_student_dataset_shape() {
        let df = student_dataset().unwrap();
        assert_eq!(df.row_count(), 12);
        assert_eq!(df.column_count(), 6);
        for name in NUMERIC_COLUMNS {
            assert!(df.contains_column(name));
        }
        assert_eq!(df.column(AGE).unwrap().kind(), ColumnKind::Integer);
        assert_eq!(df.column(MATH_GRADE).unwrap().kind(), ColumnKind::Float);
    }
}
