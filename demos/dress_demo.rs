//! Dress a photo from the command line.
//!
//! ```text
//! cargo run --example dress_demo -- photo.jpg keypoints.json out.png \
//!     [--upper tshirt.png] [--lower pants.png] [--hat hat.png] \
//!     [--glasses glasses.png] [--annotate]
//! ```
//!
//! `keypoints.json` is a 25-element array of `{"x": .., "y": ..}`
//! objects, sentinel `(-1, -1)` for undetected landmarks.

use anyhow::Context;
use drape::{
    Keypoint, KeypointSet, Outfit, PlacementPolicy, decode_garment, decode_photo,
    draw_keypoint_markers, dress_with_report,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 {
        eprintln!(
            "usage: dress_demo <photo> <keypoints.json> <out.png> \
             [--upper P] [--lower P] [--hat P] [--glasses P] [--annotate]"
        );
        std::process::exit(2);
    }

    let photo = decode_photo(&std::fs::read(&args[0]).context("read photo")?)?;

    let keypoint_json = std::fs::read_to_string(&args[1]).context("read keypoints")?;
    let points: Vec<Keypoint> =
        serde_json::from_str(&keypoint_json).context("parse keypoints json")?;
    let keypoints = KeypointSet::from_points(&points)?;

    let mut outfit = Outfit::default();
    let mut annotate = false;
    let mut rest = args[3..].iter();
    while let Some(flag) = rest.next() {
        match flag.as_str() {
            "--annotate" => annotate = true,
            "--upper" | "--lower" | "--hat" | "--glasses" => {
                let path = rest
                    .next()
                    .with_context(|| format!("{flag} needs a path"))?;
                let garment = decode_garment(&std::fs::read(path).context("read garment")?)?;
                match flag.as_str() {
                    "--upper" => outfit.upper_body = Some(garment),
                    "--lower" => outfit.lower_body = Some(garment),
                    "--hat" => outfit.headwear = Some(garment),
                    _ => outfit.eyewear = Some(garment),
                }
            }
            other => anyhow::bail!("unknown flag {other}"),
        }
    }

    let policy = PlacementPolicy::default();
    let (mut out, report) = dress_with_report(&photo, &keypoints, &outfit, &policy)?;
    if annotate {
        draw_keypoint_markers(&mut out, &keypoints);
    }

    out.save(&args[2]).context("write output image")?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
