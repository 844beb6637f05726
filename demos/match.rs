extern crate correlator;
extern crate image as image_rs;

use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use color_eyre::eyre::Result;

use correlator::image::Image;
use correlator::{detect_feature_points, match_feature_points, RuntimeParams};

fn main() -> Result<()> {
    color_eyre::install()?;

    let image_path_1 = env::args().nth(1).unwrap_or_else(|| "images/first.png".to_string());
    let image_path_2 = env::args().nth(2).unwrap_or_else(|| "images/second.png".to_string());
    let out_path = env::args().nth(3).unwrap_or_else(|| "output/matches.yaml".to_string());

    let runtime_params = RuntimeParams::default();

    let rgb_image_1 = image_rs::open(&Path::new(&image_path_1))?.to_rgb8();
    let rgb_image_2 = image_rs::open(&Path::new(&image_path_2))?.to_rgb8();

    let image_1 = Image::from_rgb_image(&rgb_image_1);
    let image_2 = Image::from_rgb_image(&rgb_image_2);

    let points_1 = detect_feature_points(&image_1.buffer, &runtime_params)?;
    let points_2 = detect_feature_points(&image_2.buffer, &runtime_params)?;

    println!("feature points: {} / {}", points_1.len(), points_2.len());

    let matched = match_feature_points(&points_1, &points_2, runtime_params.match_threshold)?;

    println!("number of matched pairs: {}", matched.len());
    for i in 0..matched.len() {
        if let Some((first, second)) = matched.get_points(i) {
            println!("({}, {}) -> ({}, {})", first.x, first.y, second.x, second.y);
        }
    }

    let serialized = serde_yaml::to_string(&matched)?;
    let mut file = File::create(&out_path)?;
    file.write_all(serialized.as_bytes())?;

    Ok(())
}
