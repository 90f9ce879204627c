use clap::Parser;
use tagmark::application::ReadMeManipulator;
use tagmark::cli::{format_file_list, format_tag_list, Cli, Commands, ConsoleLogger};
use tagmark::domain::{MarkdownDocument, ReadMeBuilder, StringOrSeq, SuppressionItem};
use tagmark::error::TagmarkError;
use tagmark::infrastructure::locator;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TagmarkError> {
    let logger = ConsoleLogger;
    let builder = ReadMeBuilder;
    let manipulator = ReadMeManipulator::new(&logger, &builder);

    match cli.command {
        Commands::Tags { readme } => {
            let path = locator::resolve(&readme)?;
            let doc = MarkdownDocument::parse(&locator::load(&path)?);
            print!("{}", format_tag_list(&manipulator.get_all_tags(&doc)));
            Ok(())
        }
        Commands::Files { readme, tag } => {
            let path = locator::resolve(&readme)?;
            let doc = MarkdownDocument::parse(&locator::load(&path)?);
            let files = match tag {
                Some(tag) => tagmark::domain::tags::input_files_for_tag(&doc, &tag)
                    .ok_or(TagmarkError::TagNotFound(tag))?,
                None => tagmark::domain::tags::all_input_files(&doc).collect(),
            };
            print!("{}", format_file_list(&files));
            Ok(())
        }
        Commands::Changed { readme, paths } => {
            let path = locator::resolve(&readme)?;
            let doc = MarkdownDocument::parse(&locator::load(&path)?);
            print!(
                "{}",
                format_tag_list(&manipulator.get_tags_for_files_changed(&doc, &paths))
            );
            Ok(())
        }
        Commands::SetTag { readme, new_tag } => {
            let path = locator::resolve(&readme)?;
            let mut doc = MarkdownDocument::parse(&locator::load(&path)?);
            let updated = manipulator.update_latest_tag(&mut doc, &new_tag)?;
            locator::save(&path, &updated)?;
            println!("Set latest tag to {}", new_tag);
            Ok(())
        }
        Commands::AddTag {
            readme,
            new_tag,
            input_files,
        } => {
            let path = locator::resolve(&readme)?;
            let text = locator::load(&path)?;
            let updated = manipulator.insert_tag_definition(&text, &input_files, &new_tag);
            locator::save(&path, &updated)?;
            println!("Added tag {}", new_tag);
            Ok(())
        }
        Commands::Suppress {
            readme,
            suppress,
            locations,
            reason,
            from,
            text_matches,
        } => {
            let path = locator::resolve(&readme)?;
            let text = locator::load(&path)?;

            let item = SuppressionItem {
                suppress,
                reason,
                r#where: string_or_seq(locations),
                from: if from.is_empty() {
                    None
                } else {
                    Some(string_or_seq(from))
                },
                text_matches,
            };

            // append an empty section first when the readme has none
            let mut doc = if manipulator.has_suppression_block(&MarkdownDocument::parse(&text)) {
                MarkdownDocument::parse(&text)
            } else {
                MarkdownDocument::parse(&manipulator.add_suppression_block(&text))
            };

            manipulator.add_suppression(&mut doc, &item)?;
            locator::save(&path, &doc.render())?;
            println!("Suppressed {}", item.suppress);
            Ok(())
        }
    }
}

fn string_or_seq(mut values: Vec<String>) -> StringOrSeq {
    if values.len() == 1 {
        StringOrSeq::One(values.remove(0))
    } else {
        StringOrSeq::Many(values)
    }
}
