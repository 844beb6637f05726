extern crate correlator;
extern crate image as image_rs;

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use color_eyre::eyre::Result;

use correlator::image::Image;
use correlator::{detect_feature_points, RuntimeParams};

fn main() -> Result<()> {
    color_eyre::install()?;

    let image_path = env::args().nth(1).unwrap_or_else(|| "images/input.png".to_string());
    let out_path = env::args().nth(2).unwrap_or_else(|| "output/points.yaml".to_string());

    let runtime_params = RuntimeParams {
        octave_start: 1,
        octave_end: 2,
        hessian_threshold: 0.001,
        match_threshold: 0.015,
    };

    let rgb_image = image_rs::open(&Path::new(&image_path))?.to_rgb8();
    let image = Image::from_rgb_image(&rgb_image);

    let points = detect_feature_points(&image.buffer, &runtime_params)?;

    println!("number of feature points: {}", points.len());
    for point in points.iter() {
        println!("{}", point);
    }

    let serialized = serde_yaml::to_string(&points)?;
    let mut file = File::create(&out_path)?;
    file.write_all(serialized.as_bytes())?;

    Ok(())
}
