use echelon::{
    domains::float::RR,
    tensors::{matrix::Vector, subspace::AffineSubspace},
};

fn main() {
    let lines = [
        ("y = 2x + 1", AffineSubspace::line_from_gradient(2.0.into(), 1.0.into(), RR)),
        ("y = -x + 4", AffineSubspace::line_from_gradient((-1.0).into(), 4.0.into(), RR)),
        ("x = 3", AffineSubspace::vertical_line(3.0.into(), RR)),
        (
            "through (0,1) and (1,3)",
            AffineSubspace::line_through(
                &Vector::new(vec![0.0.into(), 1.0.into()], RR),
                &Vector::new(vec![1.0.into(), 3.0.into()], RR),
            )
            .unwrap(),
        ),
    ];

    for (i, (na, a)) in lines.iter().enumerate() {
        for (nb, b) in &lines[i + 1..] {
            let s = a.intersection(b).unwrap().into_point();
            println!("{} and {}: {:.3}", na, nb, s);
        }
    }
}
