use linmat::prelude::*;
use linmat::{LinAlgError, Tolerances};
use rand::Rng;
use std::f64::consts::FRAC_PI_2;

fn main() -> Result<(), LinAlgError> {
    // scale, then a quarter turn about +z, then a shift along +x
    let conv = Convention::RowVector;
    let model = Affine::scaling(Vec3::new(2.0, 2.0, 2.0), conv)
        .then(&Affine::rotation(FRAC_PI_2, Vec3::new(0.0, 0.0, 1.0), conv)?)?
        .then(&Affine::translation(Vec3::new(10.0, 0.0, 0.0), conv))?;

    let p = Vec3::new(1.0, 0.0, 0.0);
    println!("model matrix: {:?}", model.matrix().elements());
    println!("{} -> {}", p, model.apply_point(p));

    // hand the column-vector form to a column-major consumer
    let gpu = model.to_convention(Convention::ColumnVector).matrix().copy(Layout::ColumnMajor);
    println!("column-major upload: {:?}", gpu);

    let inv = model.inverse()?;
    println!("inverse maps it back: {}", inv.apply_point(model.apply_point(p)));

    // random cloud through the batch path
    let mut rng = rand::thread_rng();
    let mut cloud: Vec<Vec4<f64>> = (0..8)
        .map(|_| Vec4::from_point(Vec3::new(rng.r#gen(), rng.r#gen(), rng.r#gen())))
        .collect();
    model.apply_batch(&mut cloud);
    for v in &cloud {
        println!("  {}", v);
    }

    // a flattened scale has no inverse
    let flat = Mat4::from_mat3(Mat3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0));
    let result = flat.inverse_within(&Tolerances::default());
    println!("flat inverse success = {}, det = {}", result.success, result.determinant);
    Ok(())
}
