//! The built-in portfolio tree and the text blocks it serves.

use termfolio_types::error::Result;

use crate::VirtualFs;
use crate::spec::DirSpec;

pub const ABOUT: &str = "About Mark (Zeheng) Mu
----------------
Passionate about post-quantum cryptography, low-level systems, and building delightful \
developer tooling.
I am a student at the University of Toronto, pursuing a Bachelor's degree in Computer Science.";

pub const CONTACT: &str = "Contact
-------
email: pqcnerd@gmail.com
github: https://github.com/pqcnerd
linkedin: https://www.linkedin.com/in/mark-mu
x: https://x.com/pqcnerd";

pub const RESUME: &str = "Resume
------
PDF: https://pqcnerd.github.io/Resume%20CV.pdf";

pub const PROJECTS: &str = "Projects
--------
coming soon!";

impl VirtualFs {
    /// The default tree served by the portfolio shell.
    ///
    /// Built through [`VirtualFs::from_spec`] like any other tree, so a
    /// malformed layout fails here rather than at command time.
    ///
    /// ```text
    /// /
    /// ├── etc/motd
    /// ├── home/guest/{about,contact,resume}.txt
    /// ├── home/guest/projects/README.md
    /// └── tmp/
    /// ```
    pub fn portfolio() -> Result<Self> {
        let guest = DirSpec::named("guest")
            .file("about.txt", ABOUT)
            .file("contact.txt", CONTACT)
            .file("resume.txt", RESUME)
            .dir(DirSpec::named("projects").file("README.md", PROJECTS));

        let spec = DirSpec::root()
            .dir(DirSpec::named("home").dir(guest))
            .dir(DirSpec::named("etc").file(
                "motd",
                "Welcome to termfolio!\nType 'help' to see what you can do.",
            ))
            .dir(DirSpec::named("tmp"));

        Self::from_spec(&spec)
    }
}
