use proptest::prelude::*;

use ray_tracer_core::feq;
use ray_tracer_core::matrix::Matrix;
use ray_tracer_core::transform::Transform;
use ray_tracer_core::tuple::Tuple;

prop_compose! {
    fn matrix_strategy(dimension: usize, max_element: f64)(
        data in prop::collection::vec(-max_element..max_element, dimension * dimension),
    ) -> Matrix {
        // The length always matches, so construction cannot fail
        Matrix::new(dimension, data).unwrap()
    }
}

prop_compose! {
    fn square_matrix_strategy(max_element: f64)(dimension in 2usize..=4)(
        data in prop::collection::vec(-max_element..max_element, dimension * dimension),
        dimension in Just(dimension),
    ) -> Matrix {
        Matrix::new(dimension, data).unwrap()
    }
}

prop_compose! {
    fn point_strategy(max_coord: f64)(
        x in -max_coord..max_coord,
        y in -max_coord..max_coord,
        z in -max_coord..max_coord,
    ) -> Tuple {
        Tuple::point(x, y, z)
    }
}

prop_compose! {
    fn tuple_strategy(max_coord: f64)(
        x in -max_coord..max_coord,
        y in -max_coord..max_coord,
        z in -max_coord..max_coord,
        w in -max_coord..max_coord,
    ) -> Tuple {
        Tuple::tuple(x, y, z, w)
    }
}

proptest! {
    #[test]
    fn transposing_twice_gives_back_the_matrix(m in square_matrix_strategy(1e3)) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn multiplying_by_identity_gives_back_the_matrix(m in matrix_strategy(4, 1e3)) {
        let id = Matrix::identity(4);

        prop_assert_eq!(m.multiply(&id).unwrap(), m.clone());
        prop_assert_eq!(id.multiply(&m).unwrap(), m);
    }

    #[test]
    fn identity_leaves_tuples_alone(t in tuple_strategy(1e3)) {
        prop_assert_eq!(Matrix::identity(4).multiply_tuple(&t).unwrap(), t);
    }

    #[test]
    fn matrix_times_inverse_is_identity(m in square_matrix_strategy(10.0)) {
        prop_assume!(m.determinant().abs() > 1.0);

        let id = Matrix::identity(m.dimension());
        let inv = m.invert().unwrap();
        prop_assert!(m.multiply(&inv).unwrap().approx_eq(&id, 1e-6));
        prop_assert!(inv.multiply(&m).unwrap().approx_eq(&id, 1e-6));
    }

    #[test]
    fn product_with_inverse_undoes_product(
        a in matrix_strategy(4, 10.0),
        b in matrix_strategy(4, 10.0),
    ) {
        prop_assume!(b.determinant().abs() > 1.0);

        let c = a.multiply(&b).unwrap();
        let back = c.multiply(&b.invert().unwrap()).unwrap();
        prop_assert!(back.approx_eq(&a, 1e-6));
    }

    #[test]
    fn chained_transform_equals_product(
        dx in -1e2..1e2, dy in -1e2..1e2, dz in -1e2..1e2,
        s in 0.5..5.0,
        r in -std::f64::consts::PI..std::f64::consts::PI,
    ) {
        let chained = Transform::identity()
            .translate(dx, dy, dz)
            .scale(s, s, s)
            .rotate_y(r);
        let product = Transform::translation(dx, dy, dz)
            * Transform::scaling(s, s, s)
            * Transform::rotation_y(r);

        prop_assert_eq!(chained, product);
    }

    #[test]
    fn inverse_transform_returns_point(
        p in point_strategy(1e2),
        dx in -1e2..1e2, dy in -1e2..1e2, dz in -1e2..1e2,
        s in 0.5..5.0,
        r in -std::f64::consts::PI..std::f64::consts::PI,
    ) {
        let t = Transform::identity()
            .translate(dx, dy, dz)
            .rotate_z(r)
            .scale(s, s, s);
        let moved = t.apply(&p);
        let back = t.inverse().unwrap().apply(&moved);

        prop_assert!(feq(back.w, 1.0));
        prop_assert!(feq(back.x, p.x) && feq(back.y, p.y) && feq(back.z, p.z));
    }
}
