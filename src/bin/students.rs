//! Student records practical
//!
//! A small data type with a derived average and a console display.

struct Student {
    name: String,
    roll_no: u32,
    marks: Vec<f64>,
}

impl Student {
    fn new(name: &str, roll_no: u32, marks: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            roll_no,
            marks,
        }
    }

    /// Mean of all marks; 0.0 when no marks are recorded
    #[allow(clippy::cast_precision_loss)]
    fn average(&self) -> f64 {
        if self.marks.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.marks.iter().sum();
        sum / self.marks.len() as f64
    }

    fn display_info(&self) {
        println!("Student Name: {}", self.name);
        println!("Roll Number: {}", self.roll_no);
        println!("Average Marks: {:.2}", self.average());
        println!("----------------------------");
    }
}

fn main() {
    let students = vec![
        Student::new("Alice Johnson", 101, vec![85.0, 92.0, 78.0, 88.0, 90.0]),
        Student::new("Bob Smith", 102, vec![76.0, 82.0, 91.0, 79.0, 84.0]),
        Student::new("Charlie Brown", 103, vec![95.0, 89.0, 93.0, 97.0, 91.0]),
    ];

    println!("=== Student Information ===\n");
    for student in &students {
        student.display_info();
    }

    println!("=== Average Comparison ===");
    for student in &students {
        println!("{}: {:.2}", student.name, student.average());
    }
}
