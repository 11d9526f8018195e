use std::path::{Path, PathBuf};

use speculate2::speculate;
use taskdeck::server::assets::{content_type_for, resolve, Resolution, DEFAULT_MIME};

speculate! {
    describe "resolve" {
        before {
            let root = Path::new("dist");
        }

        it "joins request paths under the asset root" {
            assert_eq!(
                resolve(root, "/app.js"),
                Resolution::Serve(PathBuf::from("dist/app.js"))
            );
        }

        it "substitutes the index document for the root path" {
            assert_eq!(
                resolve(root, "/"),
                Resolution::Serve(PathBuf::from("dist/index.html"))
            );
        }

        it "collapses parent segments that stay inside the root" {
            assert_eq!(
                resolve(root, "/assets/../app.js"),
                Resolution::Serve(PathBuf::from("dist/app.js"))
            );
        }

        it "rejects paths that climb out of the root" {
            assert_eq!(resolve(root, "/../secret.env"), Resolution::Forbidden);
        }

        it "rejects traversal hidden behind nested directories" {
            assert_eq!(
                resolve(root, "/static/../../etc/passwd"),
                Resolution::Forbidden
            );
        }
    }

    describe "resolve with an absolute root" {
        it "confines the candidate the same way" {
            let root = Path::new("/srv/www/dist");
            assert_eq!(resolve(root, "/../../etc/passwd"), Resolution::Forbidden);
            assert_eq!(
                resolve(root, "/app.js"),
                Resolution::Serve(PathBuf::from("/srv/www/dist/app.js"))
            );
        }
    }

    describe "content_type_for" {
        it "maps known extensions through the table" {
            assert_eq!(content_type_for(Path::new("index.html")), "text/html");
            assert_eq!(content_type_for(Path::new("app.js")), "text/javascript");
            assert_eq!(content_type_for(Path::new("logo.svg")), "image/svg+xml");
        }

        it "falls back to the generic type for unknown extensions" {
            assert_eq!(content_type_for(Path::new("data.xyz")), DEFAULT_MIME);
        }

        it "falls back to the generic type when there is no extension" {
            assert_eq!(content_type_for(Path::new("LICENSE")), DEFAULT_MIME);
        }
    }
}
