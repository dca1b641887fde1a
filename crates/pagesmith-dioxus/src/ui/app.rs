use dioxus::prelude::*;
use pagesmith_engine::{
    Block, BlockKind, BlockStore, Cmd, LinkForm, LinkFormOutcome, MediaKind, PageShell,
    export_html_with, io,
};
use std::path::{Path, PathBuf};

use super::components::{
    BlockCard, EmptyDocument, LinkFormDialog, MediaPathForm, Notice, Notification, Toolbar,
};

const BUILDER_CSS: &str = include_str!("../../assets/builder.css");

#[component]
pub fn App(output_dir: PathBuf, shell: PageShell) -> Element {
    let mut store = use_signal(BlockStore::new);
    let mut notice = use_signal(|| None::<Notice>);
    let mut link_form_open = use_signal(|| false);
    let mut media_form = use_signal(|| None::<MediaKind>);

    let on_command = Callback::new(move |cmd: Cmd| {
        let patch = store.write().apply(cmd);
        if patch.is_noop() {
            log::debug!("command left the page unchanged");
        }
    });

    let add_text = move |_: ()| {
        on_command.call(Cmd::Add {
            kind: BlockKind::Text,
            content: None,
        });
    };

    let snapshot = store.read().snapshot();
    let block_count = snapshot.blocks.len();

    rsx! {
        style { {BUILDER_CSS} }
        div {
            class: "app-container",
            Toolbar {
                block_count,
                on_add_text: add_text,
                on_add_media: move |kind: MediaKind| media_form.set(Some(kind)),
                on_add_link: move |_| link_form_open.set(true),
                on_export: move |_| {
                    let result = export_page(store.read().blocks(), &shell, &output_dir);
                    notice.set(Some(result));
                },
            }
            if let Some(current) = notice.read().clone() {
                Notification {
                    notice: current,
                    on_dismiss: move |_| notice.set(None),
                }
            }
            div {
                class: "page-canvas",
                if snapshot.is_empty() {
                    EmptyDocument { on_add_text: add_text }
                } else {
                    for (id, block) in snapshot.blocks.into_iter().map(|block| (block.id(), block)) {
                        BlockCard {
                            key: "{id}",
                            block,
                            on_command,
                        }
                    }
                }
            }
            if *link_form_open.read() {
                LinkFormDialog {
                    on_close: move |form: LinkForm| {
                        link_form_open.set(false);
                        match link_form_command(&form) {
                            Ok(Some(cmd)) => on_command.call(cmd),
                            Ok(None) => {}
                            Err(missing) => notice.set(Some(missing)),
                        }
                    },
                }
            }
            if let Some(kind) = *media_form.read() {
                MediaPathForm {
                    kind,
                    on_close: move |path: Option<String>| {
                        media_form.set(None);
                        if let Some(path) = path
                            && let Err(failed) = add_media_from_path(&mut store.write(), kind, &path)
                        {
                            notice.set(Some(failed));
                        }
                    },
                }
            }
        }
    }
}

/// Command for a closed link dialog, or the notice to show when the URL was left empty
fn link_form_command(form: &LinkForm) -> Result<Option<Cmd>, Notice> {
    match form.resolve() {
        LinkFormOutcome::MissingUrl => Err(Notice::error("Please enter a URL")),
        outcome => Ok(outcome.into_command()),
    }
}

fn add_media_from_path(store: &mut BlockStore, kind: MediaKind, path: &str) -> Result<(), Notice> {
    match io::read_media_file(Path::new(path), kind) {
        Ok(uri) => {
            store.add_media(kind, uri);
            Ok(())
        }
        Err(e) => {
            log::warn!("could not add media from {path}: {e}");
            Err(Notice::error(format!("Could not add media: {e}")))
        }
    }
}

fn export_page(blocks: &[Block], shell: &PageShell, output_dir: &Path) -> Notice {
    let html = export_html_with(blocks, shell);
    match io::write_export(output_dir, &html) {
        Ok(path) => Notice::info(format!("Exported {}", path.display())),
        Err(e) => {
            log::error!("export failed: {e}");
            Notice::error(format!("Export failed: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::NoticeLevel;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use pagesmith_engine::{BlockContent, EXPORT_FILE_NAME};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_app_starts_with_empty_page_message() {
        let temp_dir = TempDir::new().unwrap();
        let mut dom = VirtualDom::new_with_props(
            App,
            AppProps {
                output_dir: temp_dir.path().to_path_buf(),
                shell: PageShell::default(),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Your page is empty."));
        assert!(html.contains("Export HTML"));
        assert!(!html.contains("class=\"block-card\""));
    }

    #[test]
    fn test_link_form_with_url_creates_link() {
        let cmd = link_form_command(&LinkForm::submitted(" https://example.com ", ""))
            .unwrap()
            .unwrap();

        let mut store = BlockStore::new();
        let id = store.apply(cmd).changed.unwrap();

        let BlockContent::Link(link) = store.get(id).unwrap().body() else {
            panic!("expected a link block");
        };
        assert_eq!(link.url, "https://example.com");
        assert_eq!(link.display_text, None);
    }

    #[test]
    fn test_cancelled_link_form_is_silent() {
        assert_eq!(link_form_command(&LinkForm::cancelled()), Ok(None));
    }

    #[test]
    fn test_empty_link_url_notifies() {
        let notice = link_form_command(&LinkForm::submitted("   ", "Visit")).unwrap_err();

        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Please enter a URL");
    }

    #[test]
    fn test_add_media_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("clip.webm");
        std::fs::write(&path, b"hello").unwrap();
        let mut store = BlockStore::new();

        add_media_from_path(&mut store, MediaKind::Video, &path.to_string_lossy()).unwrap();

        assert_eq!(store.blocks()[0].kind(), BlockKind::Video);
        assert_eq!(store.blocks()[0].content(), "data:video/webm;base64,aGVsbG8=");
    }

    #[test]
    fn test_add_media_rejects_wrong_kind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("photo.png");
        std::fs::write(&path, b"hello").unwrap();
        let mut store = BlockStore::new();

        let notice =
            add_media_from_path(&mut store, MediaKind::Video, &path.to_string_lossy()).unwrap_err();

        assert!(store.is_empty());
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.starts_with("Could not add media"));
    }

    #[test]
    fn test_export_page_writes_file_and_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = BlockStore::new();
        store.add_link("https://example.com", Some("Visit".to_string()));

        let notice = export_page(store.blocks(), &PageShell::default(), temp_dir.path());

        assert_eq!(notice.level, NoticeLevel::Info);
        let written = std::fs::read_to_string(temp_dir.path().join(EXPORT_FILE_NAME)).unwrap();
        assert!(written.contains(">Visit</a>"));
    }

    #[test]
    fn test_export_page_into_file_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let not_a_dir = temp_dir.path().join("taken");
        std::fs::write(&not_a_dir, b"").unwrap();

        let notice = export_page(&[], &PageShell::default(), &not_a_dir);

        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.starts_with("Export failed"));
    }
}
