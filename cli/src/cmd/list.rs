use merkaz::entry::FileEntry;

#[derive(Default)]
struct ColumnWidths {
    kind: usize,
    name: usize,
}

impl ColumnWidths {
    fn from_iter<'a>(iter: impl Iterator<Item = &'a FileEntry>) -> Self {
        iter.fold(Self::default(), |mut res, item| {
            res.kind = res.kind.max(kind(item).len());
            res.name = res.name.max(item.name.len());
            res
        })
    }
}

fn kind(entry: &FileEntry) -> &'static str {
    if entry.is_folder {
        "directory"
    } else {
        "file"
    }
}

pub(crate) fn write(entries: &[FileEntry]) {
    let widths = ColumnWidths::from_iter(entries.iter());
    for entry in entries {
        println!(
            "{:<kw$}  {:nw$}  {}",
            kind(entry),
            entry.name,
            entry.path,
            kw = widths.kind,
            nw = widths.name,
        );
    }
}

#[derive(clap::Parser)]
pub(crate) struct Command {
    /// Sort folders first, then by name
    #[clap(long)]
    sort: bool,

    /// Remote folder to list, the shared root by default
    #[clap(default_value = "")]
    path: String,
}

impl Command {
    #[tracing::instrument(skip_all, fields(path = %self.path))]
    pub(crate) async fn execute(self, client: merkaz::Client) -> anyhow::Result<()> {
        if !client.token_store().is_logged_in() {
            tracing::warn!("no session token stored, the server may refuse the request");
        }
        let listing = client
            .list_files(Some(self.path.trim_matches('/')))
            .await
            .map_err(|err| anyhow::anyhow!("unable to list {:?}: {err}", self.path))?;
        if listing.is_admin.unwrap_or_default() {
            tracing::info!("logged in as administrator");
        }
        let mut items = listing.items;
        if self.sort {
            items.sort();
        }
        write(&items);
        Ok(())
    }
}
