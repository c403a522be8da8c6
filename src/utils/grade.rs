//! 字母等级与绩点换算

/// 哨兵值：尚未评定的等级在接口层显示为 "--"
pub const NO_GRADE: &str = "--";

/// 字母等级对应的绩点
///
/// "E" 计 0.0 绩点但参与平均；"--" 与未知等级返回 None，不参与平均。
pub fn grade_points(grade: &str) -> Option<f64> {
    match grade {
        "A" => Some(4.0),
        "A-" => Some(3.7),
        "B+" => Some(3.3),
        "B" => Some(3.0),
        "B-" => Some(2.7),
        "C+" => Some(2.3),
        "C" => Some(2.0),
        "C-" => Some(1.7),
        "D+" => Some(1.3),
        "D" => Some(1.0),
        "D-" => Some(0.7),
        "E" => Some(0.0),
        _ => None,
    }
}

/// 按已评定等级的绩点均值计算 GPA；没有已评定等级时为 0.0
pub fn compute_gpa<S: AsRef<str>>(grades: &[S]) -> f64 {
    let mut total = 0.0;
    let mut count = 0u32;
    for grade in grades {
        if let Some(points) = grade_points(grade.as_ref()) {
            total += points;
            count += 1;
        }
    }
    if count == 0 { 0.0 } else { total / count as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_point_table() {
        assert_eq!(grade_points("A"), Some(4.0));
        assert_eq!(grade_points("A-"), Some(3.7));
        assert_eq!(grade_points("B+"), Some(3.3));
        assert_eq!(grade_points("E"), Some(0.0));
        assert_eq!(grade_points(NO_GRADE), None);
        assert_eq!(grade_points("F"), None);
    }

    #[test]
    fn test_gpa_skips_unassigned_grades() {
        // [A, B, "--"] -> (4.0 + 3.0) / 2 = 3.5
        let grades = ["A", "B", "--"];
        assert!((compute_gpa(&grades) - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gpa_counts_failing_grade() {
        // E 计入均值分母
        let grades = ["A", "E"];
        assert!((compute_gpa(&grades) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gpa_without_graded_classes_is_zero() {
        let grades = ["--", "--"];
        assert_eq!(compute_gpa(&grades), 0.0);
        let empty: [&str; 0] = [];
        assert_eq!(compute_gpa(&empty), 0.0);
    }
}
