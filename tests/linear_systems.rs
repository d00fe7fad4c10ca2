use echelon::{
    domains::{
        float::{FloatField, F64, RR},
        rational::{RationalField, Q},
        Ring,
    },
    tensors::{
        matrix::{Matrix, MatrixError, Vector},
        solve::Solution,
        subspace::{AffineSubspace, Subspace},
    },
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_matrix(rng: &mut StdRng, nrows: u32, ncols: u32) -> Matrix<RationalField> {
    let data = (0..nrows * ncols).map(|_| Q.sample(rng, (-4, 5))).collect();
    Matrix::from_linear(data, nrows, ncols, Q).unwrap()
}

fn random_vector(rng: &mut StdRng, dim: u32) -> Vector<RationalField> {
    Vector::new((0..dim).map(|_| Q.sample(rng, (-4, 5))).collect(), Q)
}

fn random_float_matrix(rng: &mut StdRng, nrows: u32, ncols: u32) -> Matrix<FloatField<F64>> {
    let data = (0..nrows * ncols).map(|_| RR.sample(rng, (-4, 5))).collect();
    Matrix::from_linear(data, nrows, ncols, RR).unwrap()
}

/// A random integer-valued matrix whose last row is a multiple of the first.
fn singular_float_matrix(rng: &mut StdRng, n: u32) -> (Matrix<FloatField<F64>>, i64) {
    let mut a = random_float_matrix(rng, n, n);
    if FloatField::<F64>::is_zero(&a[(0, 0)]) {
        a[(0, 0)] = RR.one();
    }

    let k = rng.gen_range(-3..4);
    for j in 0..n {
        a[(n - 1, j)] = RR.mul(&RR.nth(k), &a[(0, j)]);
    }
    (a, k)
}

#[test]
fn consistent_systems_contain_their_witness() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..200 {
        let (nrows, ncols) = (rng.gen_range(1..5), rng.gen_range(1..5));
        let a = random_matrix(&mut rng, nrows, ncols);
        let x = random_vector(&mut rng, ncols);
        let b = a.mul_vec(&x).unwrap();

        match a.solve(&b).unwrap() {
            Solution::None => panic!("A consistent system has no solution:\n{:#}", a),
            Solution::Point(p) => {
                assert_eq!(p, x);
                assert_eq!(a.rank(), ncols as usize);
            }
            Solution::Space(s) => {
                assert!(s.contains(&x).unwrap());
                assert_eq!(s.subspace().directions().len(), ncols as usize - a.rank());
                assert_eq!(s.subspace().dimension(), ncols as usize - a.rank());

                let params: Vec<_> = s
                    .subspace()
                    .directions()
                    .iter()
                    .map(|_| Q.sample(&mut rng, (-3, 4)))
                    .collect();
                let p = s.point_at(&params).unwrap();
                assert_eq!(a.mul_vec(&p).unwrap(), b);

                for d in s.subspace().directions() {
                    assert!(a.mul_vec(d).unwrap().is_zero());
                }
            }
        }
    }
}

#[test]
fn echelon_forms() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let (nrows, ncols) = (rng.gen_range(1..6), rng.gen_range(1..6));
        let a = random_matrix(&mut rng, nrows, ncols);

        let rref = a.reduced_row_echelon_form();
        assert!(rref.is_rref(), "Not reduced:\n{:#}", rref);
        assert_eq!(rref.reduced_row_echelon_form(), rref);
        assert_eq!(a.row_echelon_form().reduced_row_echelon_form(), rref);
        assert_eq!(a.rank(), a.transpose().rank());
        assert_eq!(a.row_space().dimension(), a.rank());
        assert_eq!(a.col_space().directions().len(), a.rank());
    }
}

#[test]
fn determinants_agree() {
    let mut rng = StdRng::seed_from_u64(11);

    for n in 0..6 {
        for _ in 0..20 {
            let a = random_matrix(&mut rng, n, n);
            let det = a.determinant().unwrap();
            assert_eq!(det, a.determinant_by_cofactors().unwrap());
            assert_eq!(det, a.transpose().determinant().unwrap());
            assert_eq!(RationalField::is_zero(&det), a.rank() < n as usize);

            if let Ok(inv) = a.inv() {
                assert!((&a * &inv).is_identity());
                assert_eq!(Q.mul(&det, &inv.determinant().unwrap()), Q.one());

                let b = random_vector(&mut rng, n);
                let x = a.solve_cramer(&b).unwrap();
                assert_eq!(a.solve(&b).unwrap(), Solution::Point(x));
            }
        }
    }
}

#[test]
fn intersections_contain_common_points() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..100 {
        let p = random_vector(&mut rng, 3);

        let da = rng.gen_range(0..3);
        let db = rng.gen_range(0..3);
        let a = AffineSubspace::new(
            Subspace::new((0..da).map(|_| random_vector(&mut rng, 3)).collect()).unwrap(),
            p.clone(),
        )
        .unwrap();

        // b passes through p, but its offset is another point on b
        let through_p = AffineSubspace::new(
            Subspace::new((0..db).map(|_| random_vector(&mut rng, 3)).collect()).unwrap(),
            p.clone(),
        )
        .unwrap();
        let params: Vec<_> = through_p
            .subspace()
            .directions()
            .iter()
            .map(|_| Q.sample(&mut rng, (-3, 4)))
            .collect();
        let b = AffineSubspace::new(
            through_p.subspace().clone(),
            through_p.point_at(&params).unwrap(),
        )
        .unwrap();

        match a.intersection(&b).unwrap() {
            Solution::None => panic!("{} and {} share {}", a, b, p),
            Solution::Point(q) => assert_eq!(q, p),
            Solution::Space(s) => {
                assert!(s.contains(&p).unwrap());
                assert!(a.contains(s.offset()).unwrap());
                assert!(b.contains(s.offset()).unwrap());
                for d in s.subspace().directions() {
                    assert!(a.subspace().contains(d).unwrap());
                    assert!(b.subspace().contains(d).unwrap());
                }
            }
        }
    }
}

#[test]
fn skew_lines() {
    let v = |x: [i64; 3]| Vector::new(x.iter().map(|&e| e.into()).collect(), Q);

    let a = AffineSubspace::line(v([0, 0, 0]), v([1, 0, 0])).unwrap();
    let b = AffineSubspace::line(v([0, 0, 1]), v([0, 1, 0])).unwrap();
    assert!(a.intersection(&b).unwrap().is_none());

    let c = AffineSubspace::line_through(&v([2, 0, 0]), &v([2, 5, 0])).unwrap();
    assert_eq!(a.intersection(&c).unwrap(), Solution::Point(v([2, 0, 0])));
}

#[test]
fn float_determinants_agree() {
    let mut rng = StdRng::seed_from_u64(13);

    for n in 1..5 {
        for _ in 0..20 {
            let a = random_float_matrix(&mut rng, n, n);
            // exact, since every intermediate is a small integer
            let exact = a.determinant_by_cofactors().unwrap().into_inner();
            let det = a.determinant().unwrap().into_inner();
            assert!(
                (det - exact).abs() <= 1e-9 * exact.abs().max(1.),
                "{} != {} for\n{:#}",
                det,
                exact,
                a
            );

            let rref = a.reduced_row_echelon_form();
            assert!(rref.is_rref(), "Not reduced:\n{:#}", rref);
            assert_eq!(rref.reduced_row_echelon_form(), rref);
        }
    }
}

#[test]
fn float_singular_systems() {
    let mut rng = StdRng::seed_from_u64(17);

    for n in 2..5 {
        for _ in 0..20 {
            let (a, k) = singular_float_matrix(&mut rng, n);

            assert!(a.rank() < n as usize, "Full rank:\n{:#}", a);
            assert_eq!(a.determinant(), Ok(0.0.into()));
            assert_eq!(a.determinant_by_cofactors(), Ok(0.0.into()));
            assert_eq!(a.inv(), Err(MatrixError::SingularMatrix));

            let x = Vector::new((0..n).map(|_| RR.sample(&mut rng, (-4, 5))).collect(), RR);
            let b = a.mul_vec(&x).unwrap();
            assert!(!matches!(a.solve(&b).unwrap(), Solution::Point(_)));

            // break the dependency between the first and the last equation
            let mut c = b.clone();
            c[n - 1] = RR.add(&RR.mul(&RR.nth(k), &b[0]), &RR.one());
            assert!(a.solve(&c).unwrap().is_none(), "Solved\n{:#}\nfor {}", a, c);
        }
    }
}
