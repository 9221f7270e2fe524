use super::models::{Block, Content, DocSection, Inline, SearchEntry, Section, SectionId, TocEntry};
use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::path::Path;

fn section(id: &str, label: &str) -> Section {
    Section {
        id: id.into(),
        label: label.to_string(),
    }
}

fn entry(id: &str, title: &str, description: &str) -> SearchEntry {
    SearchEntry {
        section_id: id.into(),
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn toc(id: &str, title: &str, children: Vec<TocEntry>) -> TocEntry {
    TocEntry {
        section_id: id.into(),
        title: title.to_string(),
        children,
    }
}

fn heading(level: u8, text: &str) -> Block {
    Block::Heading {
        level,
        text: text.to_string(),
    }
}

fn para(inlines: Vec<Inline>) -> Block {
    Block::Paragraph { inlines }
}

fn code(text: &str) -> Block {
    Block::Code {
        text: text.to_string(),
    }
}

fn t(s: &str) -> Inline {
    Inline::Text(s.to_string())
}

fn c(s: &str) -> Inline {
    Inline::Code(s.to_string())
}

/// The built-in "getting started" guide.
#[must_use]
pub fn default_content() -> Content {
    Content {
        site_name: "MkDocs".to_string(),
        sections: vec![
            section("getting-started", "Getting Started"),
            section("installation", "Installation"),
            section("creating-project", "Creating a Project"),
            section("dev-server", "Development Server"),
            section("configuration", "Configuration"),
        ],
        entries: vec![
            entry(
                "getting-started",
                "Getting Started",
                "Introduction to MkDocs documentation",
            ),
            entry(
                "installation",
                "Installation",
                "Install MkDocs with pip install mkdocs",
            ),
            entry(
                "creating-project",
                "Creating a new project",
                "Create and set up a new MkDocs project",
            ),
            entry(
                "creating-project",
                "Initial MkDocs layout",
                "Understanding the project structure and files",
            ),
            entry(
                "dev-server",
                "Development Server",
                "Run mkdocs serve to preview documentation",
            ),
            entry(
                "configuration",
                "Configuration",
                "Configure your MkDocs site settings",
            ),
            entry(
                "configuration",
                "Adding pages",
                "Add new pages and navigation to your docs",
            ),
            entry(
                "configuration",
                "Theming",
                "Change themes and customize appearance",
            ),
            entry(
                "configuration",
                "Building the site",
                "Build static site with mkdocs build",
            ),
            entry(
                "deploying",
                "Deploying",
                "Deploy your documentation site to hosting",
            ),
        ],
        toc: vec![
            toc("installation", "Installation", vec![]),
            toc("creating-project", "Creating a project", vec![]),
            toc("dev-server", "Development Server", vec![]),
            toc(
                "configuration",
                "Configuration",
                vec![
                    toc("configuration", "Adding pages", vec![]),
                    toc("configuration", "Theming", vec![]),
                    toc("configuration", "Building the site", vec![]),
                ],
            ),
            toc("deploying", "Deploying", vec![]),
        ],
        document: default_document(),
    }
}

fn default_document() -> Vec<DocSection> {
    vec![
        DocSection {
            anchor: "getting-started".into(),
            blocks: vec![
                heading(1, "MkDocs"),
                para(vec![t("Project documentation with Markdown.")]),
            ],
        },
        DocSection {
            anchor: "installation".into(),
            blocks: vec![
                heading(2, "Installation"),
                para(vec![t(
                    "To install MkDocs, run the following command from the command line:",
                )]),
                code("pip install mkdocs"),
                para(vec![
                    t("For more details, see the "),
                    Inline::Link("Installation Guide".to_string()),
                    t("."),
                ]),
            ],
        },
        DocSection {
            anchor: "creating-project".into(),
            blocks: vec![
                heading(2, "Creating a new project"),
                para(vec![t(
                    "Getting started is super easy. To create a new project, run the following command from the command line:",
                )]),
                code("mkdocs new my-project\ncd my-project"),
                para(vec![t(
                    "Take a moment to review the initial project that has been created for you.",
                )]),
                heading(3, "The initial MkDocs layout"),
                para(vec![
                    t("There's a single configuration file named "),
                    c("mkdocs.yml"),
                    t(", and a folder named "),
                    c("docs"),
                    t(" that will contain your documentation source files ("),
                    c("docs"),
                    t(" is the default value for the "),
                    c("docs_dir"),
                    t(" configuration setting). Right now the docs folder just contains a single documentation page, named "),
                    c("index.md"),
                    t("."),
                ]),
            ],
        },
        DocSection {
            anchor: "dev-server".into(),
            blocks: vec![
                heading(2, "Development Server"),
                para(vec![
                    t("MkDocs comes with a built-in dev-server that lets you preview your documentation as you work on it. Make sure you're in the same directory as the "),
                    c("mkdocs.yml"),
                    t(" configuration file, and then start the server by running the "),
                    c("mkdocs serve"),
                    t(" command:"),
                ]),
                code(
                    "$ mkdocs serve\n\
                     INFO    -  Building documentation...\n\
                     INFO    -  Cleaning site directory\n\
                     INFO    -  Documentation built in 0.22 seconds\n\
                     INFO    -  [15:50:43] Watching paths for changes: 'docs', 'mkdocs.yml'\n\
                     INFO    -  [15:50:43] Serving on http://127.0.0.1:8000/",
                ),
                para(vec![
                    t("Open up "),
                    c("http://127.0.0.1:8000/"),
                    t(" in your browser, and you'll see the default home page being displayed."),
                ]),
                para(vec![t(
                    "The dev-server also supports auto-reloading, and will rebuild your documentation whenever anything in the configuration file, documentation directory, or theme directory changes.",
                )]),
            ],
        },
        DocSection {
            anchor: "configuration".into(),
            blocks: vec![
                heading(2, "Configuration"),
                heading(3, "Adding pages"),
                para(vec![t("Now add a second page to your documentation:")]),
                code("curl 'https://jaspervdj.be/lorem-markdownum/markdown.txt' > docs/about.md"),
                para(vec![
                    t("As our documentation site will include some navigation headers, you may want to edit the configuration file and add some information about the order, title, and nesting of each page in the navigation header by adding a "),
                    c("nav"),
                    t(" setting:"),
                ]),
                code("site_name: MkLorum\nnav:\n  - Home: index.md\n  - About: about.md"),
                heading(3, "Theming"),
                para(vec![
                    t("Now change the configuration file to alter how the documentation is displayed by changing the theme. Edit the "),
                    c("mkdocs.yml"),
                    t(" file and add a theme setting:"),
                ]),
                code("site_name: MkLorum\nnav:\n  - Home: index.md\n  - About: about.md\ntheme: readthedocs"),
                heading(3, "Building the site"),
                para(vec![t(
                    "That's looking good. You're ready to deploy the first pass of your documentation. First build the documentation:",
                )]),
                code("mkdocs build"),
                para(vec![
                    t("This will create a new directory, named "),
                    c("site"),
                    t(". Take a look inside the directory:"),
                ]),
                code("$ ls site\nabout  fonts  index.html  license  search.html\ncss    img    js          mkdocs   sitemap.xml"),
                Block::Note {
                    inlines: vec![
                        Inline::Strong("Note:".to_string()),
                        t(" The "),
                        c("site_name"),
                        t(" configuration option is the only required option in your configuration file."),
                    ],
                },
            ],
        },
        DocSection {
            anchor: "deploying".into(),
            blocks: vec![
                heading(2, "Deploying"),
                para(vec![t(
                    "The documentation site that you just built only uses static files so you'll be able to host it from pretty much anywhere. Simply upload the contents of the entire site directory to wherever you're hosting your website from and you're done.",
                )]),
                para(vec![
                    t("For specific instructions on a number of common hosts, see the "),
                    Inline::Link("Deploying your Docs".to_string()),
                    t(" page."),
                ]),
            ],
        },
    ]
}

/// Reads a TOML content file and validates it.
pub fn load_content(path: &Path) -> Result<Content> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading content file {}", path.display()))?;
    let content: Content = toml::from_str(&raw)
        .with_context(|| format!("parsing content file {}", path.display()))?;
    validate(&content).with_context(|| format!("invalid content in {}", path.display()))?;
    Ok(content)
}

pub fn validate(content: &Content) -> Result<()> {
    if content.sections.is_empty() {
        bail!("at least one section is required");
    }
    let mut seen: HashSet<&SectionId> = HashSet::new();
    for s in &content.sections {
        if !seen.insert(&s.id) {
            bail!("duplicate section id '{}'", s.id);
        }
    }
    let mut anchors: HashSet<&SectionId> = HashSet::new();
    for d in &content.document {
        if !anchors.insert(&d.anchor) {
            bail!("duplicate document anchor '{}'", d.anchor);
        }
    }
    Ok(())
}
