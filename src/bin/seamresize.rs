use seamresize::{calculate_energy, energy_to_image, paint_seam, Orientation, SeamCarver, SeamFinder};
use std::path::{Path, PathBuf};

#[macro_use]
extern crate clap;

use clap::{App, Arg};
use failure::{bail, Error, ResultExt};
use image::{GenericImageView, Rgb};
use log::info;

// Write next to the working directory, keeping the input's format.
fn default_output(input: &Path) -> PathBuf {
    let ext = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("png");
    PathBuf::from(format!("output.{}", ext))
}

fn run() -> Result<(), Error> {
    let matches = App::new("seamresize")
        .version(crate_version!())
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to resize")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("width")
                .help("The new width, no larger than the current one")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("height")
                .help("The new height, no larger than the current one")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result [default: output.<input extension>]")
                .short("o")
                .long("output")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("energy")
                .help("Write the energy map of the input instead of resizing it")
                .long("energy"),
        )
        .arg(
            Arg::with_name("seam")
                .help("Write the input with its first vertical seam painted red instead of resizing it")
                .long("seam")
                .conflicts_with("energy"),
        )
        .get_matches();

    let input = Path::new(matches.value_of("input").unwrap_or_default());
    let new_width = value_t!(matches, "width", u32)?;
    let new_height = value_t!(matches, "height", u32)?;
    let output = matches
        .value_of("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output(input));

    let image = image::open(input).with_context(|_| format!("cannot read {}", input.display()))?;
    let (width, height) = image.dimensions();
    if new_width > width || new_height > height {
        bail!(
            "new size {}x{} can't be larger than {}x{}",
            new_width,
            new_height,
            width,
            height
        );
    }

    if matches.is_present("energy") {
        let energy = calculate_energy(&image.to_rgb8());
        energy_to_image(&energy)
            .save(&output)
            .with_context(|_| format!("cannot write {}", output.display()))?;
        info!("energy map written to {}", output.display());
        return Ok(());
    }

    let mut carver = SeamCarver::from_image(&image)?;

    if matches.is_present("seam") {
        let seam = carver.find_vertical_seam();
        paint_seam(carver.picture(), &seam, Orientation::Vertical, Rgb([255, 0, 0]))
            .save(&output)
            .with_context(|_| format!("cannot write {}", output.display()))?;
        info!("seam written to {}", output.display());
        return Ok(());
    }

    info!(
        "carving {} from {}x{} to {}x{}",
        input.display(),
        width,
        height,
        new_width,
        new_height
    );
    carver.carve(new_width, new_height)?;
    carver
        .into_picture()
        .save(&output)
        .with_context(|_| format!("cannot write {}", output.display()))?;
    info!("result written to {}", output.display());
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("seamresize: {}", err);
        for cause in err.iter_causes() {
            eprintln!("  caused by: {}", cause);
        }
        std::process::exit(1);
    }
}
