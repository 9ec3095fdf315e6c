use std::path::PathBuf;

use anyhow::Result;

use crate::commands::load_catalog;

#[derive(clap::Args)]
pub struct CatalogArgs {
    /// Only list atoms of this protocol number
    #[arg(long, value_name = "PROTOCOL")]
    pub protocol: Option<u8>,

    /// Look up a single atom by name
    #[arg(long, value_name = "NAME")]
    pub find: Option<String>,

    /// Atom catalog table to use instead of the built-in one
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

pub fn execute(args: CatalogArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;

    if let Some(name) = &args.find {
        match catalog.find_by_name(name) {
            Some(def) => {
                println!(
                    "{:>3}:{:<3} {:<32} {:<16} {:?}",
                    def.protocol, def.atom_number, def.name, def.atom_type, def.flags
                );
            }
            None => println!("no atom named `{name}`"),
        }
        return Ok(());
    }

    let mut shown = 0usize;
    for def in catalog.iter() {
        if args.protocol.is_some_and(|p| p != def.protocol) {
            continue;
        }
        println!(
            "{:>3}:{:<3} {:<32} {:<16} {:?}",
            def.protocol, def.atom_number, def.name, def.atom_type, def.flags
        );
        shown += 1;
    }
    println!("{shown} atoms");
    Ok(())
}
