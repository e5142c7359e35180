//! Terminal room browser over RoomService.
//!
//! Search by room number, pick from the room list with `#n`, or list every
//! room with `all`.

use std::io::Write;

use minirpc_server::infrastructure::dto::rpc::RoomRecordDto;

use crate::{prompt::Prompt, stub::RoomService};

const RULE: &str = "========================================";

/// What the user asked for on one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserCommand {
    /// Blank line
    Empty,
    /// Look up a room by number
    Search(String),
    /// Look up the n-th room of the pick list (1-based)
    Pick(usize),
    /// Summarize every room
    ShowAll,
    Quit,
}

impl BrowserCommand {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return Self::Empty;
        }
        if let Some(index) = input.strip_prefix('#')
            && let Ok(n) = index.trim().parse::<usize>()
        {
            return Self::Pick(n);
        }
        match input.to_ascii_lowercase().as_str() {
            "all" => Self::ShowAll,
            "quit" | "exit" => Self::Quit,
            _ => Self::Search(input.to_string()),
        }
    }
}

/// Render one room's details.
pub fn render_room_details(room: &RoomRecordDto) -> String {
    let mut text = format!("{RULE}\n           ROOM DETAILS\n{RULE}\n\n");
    text.push_str(&format!("Room Number: {}\n\n", room.room_number));
    text.push_str("Occupants:\n");
    for (i, name) in room.occupant_names.iter().enumerate() {
        text.push_str(&format!("  {}. {}\n", i + 1, name));
    }
    text.push_str(&format!("\nWarden Contact: {}\n", room.warden_contact));
    text.push_str(&format!("\n{RULE}"));
    text
}

/// Render the message for a room that does not exist.
pub fn render_not_found(room_number: &str) -> String {
    format!("Room not found: {room_number}\n\nPlease check the room number and try again.")
}

/// Render the pick list shown when the browser starts.
pub fn render_pick_list(rooms: &[String]) -> String {
    let entries: Vec<String> = rooms
        .iter()
        .enumerate()
        .map(|(i, room)| format!("#{} {}", i + 1, room))
        .collect();
    format!("Rooms: {}", entries.join("  "))
}

/// Interactive browser bound to one RoomService
pub struct RoomBrowser<'a, S: RoomService + ?Sized> {
    service: &'a S,
    /// Sorted room numbers, empty when they could not be fetched
    pick_list: Vec<String>,
}

impl<'a, S: RoomService + ?Sized> RoomBrowser<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self {
            service,
            pick_list: Vec::new(),
        }
    }

    /// Run until the user quits or input closes.
    pub async fn run<P, W>(&mut self, prompt: &mut P, out: &mut W) -> std::io::Result<()>
    where
        P: Prompt + ?Sized,
        W: Write + ?Sized,
    {
        writeln!(out, "{RULE}\n    Hostel Room Information Service\n{RULE}")?;

        match self.service.get_all_room_numbers().await {
            Ok(rooms) => {
                self.pick_list = rooms;
                writeln!(out, "{}", render_pick_list(&self.pick_list))?;
                writeln!(
                    out,
                    "Enter a room number, '#n' to pick from the list, 'all' to show all rooms, 'quit' to exit."
                )?;
            }
            Err(e) => {
                // Search still works without the list
                tracing::warn!("Failed to fetch room list: {}", e);
                writeln!(
                    out,
                    "Enter a room number, 'all' to show all rooms, 'quit' to exit."
                )?;
            }
        }

        loop {
            out.flush()?;
            let Some(line) = prompt.read_line("Room Number: ") else {
                return Ok(());
            };

            match BrowserCommand::parse(&line) {
                BrowserCommand::Empty => writeln!(out, "Please enter a room number")?,
                BrowserCommand::Quit => return Ok(()),
                BrowserCommand::ShowAll => self.show_all(out).await?,
                BrowserCommand::Search(room_number) => self.search(&room_number, out).await?,
                BrowserCommand::Pick(n) => match n.checked_sub(1).and_then(|i| self.pick_list.get(i)) {
                    Some(room_number) => {
                        let room_number = room_number.clone();
                        self.search(&room_number, out).await?
                    }
                    None => writeln!(out, "No room #{n} in the list")?,
                },
            }
        }
    }

    async fn search<W: Write + ?Sized>(&self, room_number: &str, out: &mut W) -> std::io::Result<()> {
        match self.service.get_room_info(room_number).await {
            Ok(Some(room)) => writeln!(out, "{}", render_room_details(&room)),
            Ok(None) => writeln!(out, "{}", render_not_found(room_number)),
            Err(e) => writeln!(out, "Error searching room: {e}"),
        }
    }

    async fn show_all<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        let rooms = match self.service.get_all_room_numbers().await {
            Ok(rooms) => rooms,
            Err(e) => return writeln!(out, "Error fetching rooms: {e}"),
        };

        let mut text = format!("{RULE}\n        ALL AVAILABLE ROOMS\n{RULE}\n\n");
        text.push_str(&format!("Total Rooms: {}\n\n", rooms.len()));
        for room_number in &rooms {
            match self.service.get_room_info(room_number).await {
                Ok(Some(room)) => text.push_str(&format!(
                    "Room {}: {} occupant(s)\n",
                    room_number,
                    room.occupant_names.len()
                )),
                Ok(None) => text.push_str(&format!("Room {room_number}: not found\n")),
                Err(e) => return writeln!(out, "Error fetching rooms: {e}"),
            }
        }
        text.push_str(&format!("\n{RULE}\nEnter a room number above to view details"));
        writeln!(out, "{text}")
    }
}
