mod cli;

use anyhow::Result;
use clap::Parser;
use simple_logger::SimpleLogger;
use std::path::PathBuf;

use adocopts::{
    context::EditingContext, header::HeaderAttributes, images::PreviewImageCopier,
    resolver::OptionsResolver, settings::PreviewSettings,
};

use cli::{Cli, editor_file, read_base_dir, read_input};

fn main() {
    let args = Cli::parse();
    let level = match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Warn,
    };
    SimpleLogger::new()
        .with_level(level)
        .with_colors(true)
        .without_timestamps()
        .init()
        .unwrap();

    if let Err(e) = run(args) {
        eprintln!("Error resolving options: {}", e);
        std::process::exit(1)
    }
}

fn run(args: Cli) -> Result<()> {
    let header = HeaderAttributes::from_source(&read_input(&args));
    let base_dir = read_base_dir(&args);

    let images_source = match header.get("imagesdir") {
        Some(images_dir) => base_dir.join(images_dir),
        None => base_dir.clone(),
    };
    let images_target = match (&args.images_target, &args.out_dir) {
        (Some(target), _) => target.clone(),
        (None, Some(out_dir)) => out_dir.join("images"),
        (None, None) => PathBuf::from("images"),
    };
    let copier = PreviewImageCopier::new(images_source, &images_target);

    // a missing output directory is reported by the resolver
    let mut context = EditingContext::new(&base_dir, args.out_dir.clone());
    context.editor_file = editor_file(&args);
    context.target_images_dir = images_target;
    context.attributes_provider = &header;
    context.image_provider = &copier;

    if let Some(settings_file) = &args.settings {
        PreviewSettings::from_file(settings_file)?.apply(&mut context);
    }
    if args.toc {
        context.toc_visible = true;
    }
    if let Some(levels) = args.toc_levels {
        context.toc_levels = levels;
    }
    if args.no_footer {
        context.no_footer = true;
    }
    if let Some(mode) = args.image_mode {
        context.image_handling_mode = mode;
    }

    let options = OptionsResolver::new().resolve(&context, args.backend)?;
    println!("{}", options.to_json(args.pretty)?);
    Ok(())
}
