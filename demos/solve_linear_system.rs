use echelon::{
    domains::rational::Q,
    printer::{AffineSubspacePrinter, PrintOptions},
    tensors::{
        matrix::{Matrix, Vector},
        solve::{AugmentedMatrix, Solution},
    },
};

fn main() {
    let a = Matrix::from_nested_vec(
        vec![
            vec![1.into(), 2.into(), 3.into(), 4.into()],
            vec![2.into(), 4.into(), 7.into(), 9.into()],
            vec![3.into(), 6.into(), 10.into(), 13.into()],
        ],
        Q,
    )
    .unwrap();
    let b = Vector::new(vec![1.into(), 3.into(), 4.into()], Q);

    let system = AugmentedMatrix::new(&a, &b).unwrap();
    println!("Solve the system\n{}\n", system);
    println!("Reduced:\n{:#}\n", system.as_matrix().reduced_row_echelon_form());

    match system.solution() {
        Solution::None => println!("The system is inconsistent"),
        Solution::Point(p) => println!("x = {}", p),
        Solution::Space(s) => {
            println!("x = {}", AffineSubspacePrinter::new(&s));
            println!(
                "\nLaTeX: {}",
                AffineSubspacePrinter::new_with_options(&s, PrintOptions::latex())
            );
        }
    }

    println!("\ndet(A A^T) = {}", (&a * &a.transpose()).determinant().unwrap());
}
