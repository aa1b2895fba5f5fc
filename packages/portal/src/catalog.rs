//! Static campus data for the map, clubs, support and notifications pages,
//! with the filters those pages offer.

use crate::models::{
    Club, Faq, FaqCategory, LocationType, MapLocation, Notification, NotificationKind, Point,
    Subject,
};

fn location(
    id: &str,
    name: &str,
    kind: LocationType,
    description: &str,
    x: f32,
    y: f32,
) -> MapLocation {
    MapLocation {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        description: description.to_string(),
        coordinates: Point { x, y },
    }
}

/// Every pin on the campus map: buildings first, then facilities.
pub fn map_locations() -> Vec<MapLocation> {
    vec![
        location(
            "b1",
            "Main Academic Building",
            LocationType::Building,
            "The main building housing lecture halls and faculty offices.",
            30.0,
            40.0,
        ),
        location(
            "b2",
            "Student Center",
            LocationType::Building,
            "Hub for student activities, dining, and recreation.",
            70.0,
            60.0,
        ),
        location(
            "b3",
            "Science Complex",
            LocationType::Building,
            "Houses laboratories and research facilities.",
            45.0,
            25.0,
        ),
        location(
            "f1",
            "Computer Lab",
            LocationType::Lab,
            "State-of-the-art computer lab with the latest hardware and software.",
            35.0,
            45.0,
        ),
        location(
            "f2",
            "Main Cafeteria",
            LocationType::Cafeteria,
            "Campus dining hall offering a variety of food options.",
            65.0,
            50.0,
        ),
        location(
            "f3",
            "Biology Department",
            LocationType::Department,
            "Home to the Biology department faculty and research.",
            40.0,
            30.0,
        ),
        location(
            "f4",
            "Staff Lounge",
            LocationType::Staff,
            "Exclusive area for faculty and staff relaxation.",
            55.0,
            35.0,
        ),
    ]
}

/// Locations of `kind` (all when `None`) whose name or description contains `query`.
pub fn find_locations(
    locations: &[MapLocation],
    query: &str,
    kind: Option<LocationType>,
) -> Vec<MapLocation> {
    let query = query.to_lowercase();
    locations
        .iter()
        .filter(|l| kind.is_none_or(|k| l.kind == k))
        .filter(|l| {
            l.name.to_lowercase().contains(&query) || l.description.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

fn club(
    id: &str,
    name: &str,
    description: &str,
    category: &str,
    member_count: u32,
    tags: &[&str],
) -> Club {
    Club {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        member_count,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn clubs() -> Vec<Club> {
    vec![
        club(
            "1",
            "Programming Club",
            "Learn programming languages and work on exciting projects together",
            "Academic",
            45,
            &["Tech", "Coding", "Computer Science"],
        ),
        club(
            "2",
            "Chess Club",
            "Weekly chess tournaments and strategy discussions",
            "Hobby",
            28,
            &["Games", "Strategy"],
        ),
        club(
            "3",
            "Debate Society",
            "Improve public speaking and debate skills through regular competitions",
            "Academic",
            32,
            &["Public Speaking", "Critical Thinking"],
        ),
        club(
            "4",
            "Photography Club",
            "Explore photography techniques and participate in campus exhibitions",
            "Arts",
            36,
            &["Arts", "Creative"],
        ),
        club(
            "5",
            "Environmental Club",
            "Promote sustainability and organize campus clean-up events",
            "Service",
            27,
            &["Environment", "Volunteering"],
        ),
        club(
            "6",
            "Film Society",
            "Weekly film screenings followed by critical discussions",
            "Arts",
            42,
            &["Movies", "Arts", "Discussion"],
        ),
    ]
}

/// Clubs whose name, description or any tag contains `query`, ignoring case.
pub fn search_clubs(clubs: &[Club], query: &str) -> Vec<Club> {
    let query = query.to_lowercase();
    clubs
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&query)
                || c.description.to_lowercase().contains(&query)
                || c.tags.iter().any(|t| t.to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

pub fn subjects() -> Vec<Subject> {
    let subject = |code: &str, name: &str, description: &str| Subject {
        code: code.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    };
    vec![
        subject(
            "CS101",
            "Introduction to Computer Science",
            "Basic principles of programming and computer systems",
        ),
        subject(
            "MATH201",
            "Calculus I",
            "Fundamental concepts of single-variable calculus",
        ),
        subject(
            "PSY101",
            "Introduction to Psychology",
            "Basic principles and theories of human behavior",
        ),
    ]
}

pub fn faqs() -> Vec<Faq> {
    let faq = |id: &str, question: &str, answer: &str, category: FaqCategory| Faq {
        id: id.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
        category,
    };
    vec![
        faq(
            "1",
            "How do I reset my password?",
            "You can reset your password by clicking on the 'Forgot Password' link on the \
             login page and following the instructions sent to your registered email.",
            FaqCategory::Account,
        ),
        faq(
            "2",
            "How do I join a club?",
            "Navigate to the Clubs page, find the club you're interested in, and click the \
             'Join' button. You'll receive a confirmation once your request is processed.",
            FaqCategory::Campus,
        ),
        faq(
            "3",
            "How do I access my class materials?",
            "You can access class materials by going to the Subjects page, selecting the \
             specific course, and clicking on the 'Materials' button.",
            FaqCategory::Academic,
        ),
        faq(
            "4",
            "What are the library hours?",
            "The main campus library is open Monday through Friday from 8 AM to 10 PM, \
             Saturday from 9 AM to 6 PM, and Sunday from 12 PM to 8 PM.",
            FaqCategory::Campus,
        ),
        faq(
            "5",
            "How do I submit an assignment?",
            "Go to your subject page, find the assignment, and click 'Submit'. You can upload \
             your files and confirm submission before the deadline.",
            FaqCategory::Academic,
        ),
    ]
}

/// FAQs in `category` (all when `None`) whose question or answer contains `query`.
pub fn search_faqs(faqs: &[Faq], query: &str, category: Option<FaqCategory>) -> Vec<Faq> {
    let query = query.to_lowercase();
    faqs.iter()
        .filter(|f| category.is_none_or(|c| f.category == c))
        .filter(|f| {
            f.question.to_lowercase().contains(&query) || f.answer.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// In-memory notification list; read state is not persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationFeed {
    items: Vec<Notification>,
}

fn note(
    id: &str,
    title: &str,
    message: &str,
    kind: NotificationKind,
    date: &str,
    read: bool,
) -> Notification {
    Notification {
        id: id.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        kind,
        date: date.to_string(),
        read,
    }
}

impl Default for NotificationFeed {
    fn default() -> Self {
        Self {
            items: vec![
                note(
                    "1",
                    "Assignment Deadline",
                    "Your CS101 programming assignment is due tomorrow at 11:59 PM.",
                    NotificationKind::Academic,
                    "April 4, 2025",
                    false,
                ),
                note(
                    "2",
                    "New Event",
                    "Campus Music Festival registration is now open. Don't miss out!",
                    NotificationKind::Event,
                    "April 3, 2025",
                    false,
                ),
                note(
                    "3",
                    "Club Announcement",
                    "Programming Club meeting tomorrow at 5 PM in Room 302.",
                    NotificationKind::Club,
                    "April 2, 2025",
                    true,
                ),
                note(
                    "4",
                    "System Update",
                    "The campus app will be under maintenance tonight from 2-3 AM.",
                    NotificationKind::System,
                    "April 1, 2025",
                    true,
                ),
            ],
        }
    }
}

impl NotificationFeed {
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Returns whether a notification with `id` exists.
    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.items {
            n.read = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_locations() {
        let all = map_locations();
        assert_eq!(find_locations(&all, "", None).len(), 7);
        assert_eq!(find_locations(&all, "", Some(LocationType::Building)).len(), 3);

        let labs = find_locations(&all, "HARDWARE", None);
        assert_eq!(labs.len(), 1);
        assert_eq!(labs[0].id, "f1");

        assert!(find_locations(&all, "cafeteria", Some(LocationType::Lab)).is_empty());
    }

    #[test]
    fn test_search_clubs_matches_tags() {
        let all = clubs();
        let arts: Vec<String> = search_clubs(&all, "arts").into_iter().map(|c| c.id).collect();
        assert_eq!(arts, vec!["4", "6"]);
        assert_eq!(search_clubs(&all, "chess").len(), 1);
    }

    #[test]
    fn test_search_faqs() {
        let all = faqs();
        assert_eq!(search_faqs(&all, "", Some(FaqCategory::Campus)).len(), 2);
        assert_eq!(search_faqs(&all, "library", None).len(), 1);
        assert!(search_faqs(&all, "library", Some(FaqCategory::Account)).is_empty());
    }

    #[test]
    fn test_wrapped_answers_read_as_one_sentence() {
        for faq in faqs() {
            assert!(!faq.answer.contains("  "), "double space in faq {}", faq.id);
            assert!(!faq.answer.contains('\n'), "line break in faq {}", faq.id);
        }
        let hours = search_faqs(&faqs(), "10 PM, Saturday", None);
        assert_eq!(hours.len(), 1);
    }

    #[test]
    fn test_notification_feed() {
        let mut feed = NotificationFeed::default();
        assert_eq!(feed.unread_count(), 2);
        assert!(feed.mark_read("1"));
        assert!(!feed.mark_read("missing"));
        assert_eq!(feed.unread_count(), 1);
        feed.mark_all_read();
        assert_eq!(feed.unread_count(), 0);
    }
}
