//! Client-side generation of the downloadable server files.
//!
//! The bundle is a pure function of the server snapshot: no clock, no randomness,
//! so two renders of the same snapshot are byte-identical.

use crate::{Server, paper_download_url};

/// Name of the jar the start scripts launch.
const SERVER_JAR: &str = "paper.jar";
const JVM_FLAGS: &str = "-Xms1G -Xmx2G";
const UNSAFE_FILE_NAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// One named text file inside the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: &'static str,
    pub body: String,
}

/// The rendered download: a file name and the concatenated artifact text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBundle {
    pub file_name: String,
    pub contents: String,
}

impl ConfigBundle {
    pub fn render(server: &Server) -> Self {
        let contents = Self::artifacts(server)
            .iter()
            .map(|artifact| format!("=== {} ===\n{}", artifact.name, artifact.body))
            .collect::<Vec<_>>()
            .join("\n");

        Self {
            file_name: Self::file_name_for(&server.name),
            contents,
        }
    }

    /// `<name with each whitespace run as "_">_SERVER_FILES.txt`
    ///
    /// The name comes from the collaborator, so path separators, characters
    /// Windows rejects, control characters and leading dots also become `_`.
    /// The result is always a single path component.
    pub fn file_name_for(server_name: &str) -> String {
        let mut stem = String::with_capacity(server_name.len());
        let mut in_whitespace = false;
        for c in server_name.chars() {
            if c.is_whitespace() {
                if !in_whitespace {
                    stem.push('_');
                }
                in_whitespace = true;
                continue;
            }
            in_whitespace = false;

            let leading_dot = c == '.' && stem.chars().all(|s| s == '_');
            if leading_dot || c.is_control() || UNSAFE_FILE_NAME_CHARS.contains(&c) {
                stem.push('_');
            } else {
                stem.push(c);
            }
        }
        format!("{stem}_SERVER_FILES.txt")
    }

    pub fn artifacts(server: &Server) -> Vec<Artifact> {
        vec![
            Artifact {
                name: "server.properties",
                body: server_properties(server),
            },
            Artifact {
                name: "eula.txt",
                body: String::from("eula=true\n"),
            },
            Artifact {
                name: "start.bat",
                body: format!("@echo off\njava {JVM_FLAGS} -jar {SERVER_JAR} nogui\npause\n"),
            },
            Artifact {
                name: "start.sh",
                body: format!("#!/bin/sh\njava {JVM_FLAGS} -jar {SERVER_JAR} nogui\n"),
            },
            Artifact {
                name: "README.txt",
                body: instructions(server),
            },
        ]
    }
}

fn server_properties(server: &Server) -> String {
    format!(
        "server-port={port}\n\
         max-players={max_players}\n\
         motd={motd}\n\
         online-mode=false\n\
         difficulty=normal\n\
         gamemode=survival\n\
         pvp=true\n\
         spawn-protection=16\n\
         view-distance=10\n\
         white-list=false\n\
         enable-command-block=false\n",
        port = server.address.port,
        max_players = server.max_players,
        motd = single_line(&server.name),
    )
}

/// Drop control characters so the name cannot start a new properties line.
fn single_line(value: &str) -> String {
    value.chars().filter(|c| !c.is_control()).collect()
}

fn instructions(server: &Server) -> String {
    let plugins = if server.plugins.is_empty() {
        String::from("  none\n")
    } else {
        server
            .plugins
            .iter()
            .map(|name| format!("  - {name}\n"))
            .collect()
    };

    format!(
        "{name} (Minecraft {version})\n\
         \n\
         1. Download the server jar and save it next to these files as {SERVER_JAR}:\n   \
         {jar_url}\n\
         2. Save server.properties and eula.txt from this bundle into the same folder.\n\
         3. Run start.bat on Windows or start.sh on Linux/macOS (Java 17+ required).\n\
         4. Players connect to {address} (up to {max_players} players).\n\
         \n\
         Plugins (place the jars in the plugins/ folder):\n\
         {plugins}",
        name = single_line(&server.name),
        version = server.version,
        jar_url = paper_download_url(&server.version),
        address = server.address,
        max_players = server.max_players,
    )
}
