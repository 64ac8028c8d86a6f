//! Landing page content shown over the backdrop.
//!
//! All content is fixed at compile time; the only state is the active tab
//! and the content card's transition.

/// Icon shown next to a heading or tab label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    BookOpen,
    Code,
    Coffee,
    User,
    Mail,
    Github,
    GitBranch,
    FileText,
    Cpu,
    Lightbulb,
}

impl Icon {
    /// Text glyph used where no icon font is available.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::BookOpen => "📖",
            Icon::Code => "⌨",
            Icon::Coffee => "☕",
            Icon::User => "👤",
            Icon::Mail => "✉",
            Icon::Github => "🐙",
            Icon::GitBranch => "⎇",
            Icon::FileText => "📄",
            Icon::Cpu => "🖥",
            Icon::Lightbulb => "💡",
        }
    }
}

/// A tab of the content switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: Icon,
}

/// An entry of the recent-articles list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Article {
    pub id: u32,
    pub title: &'static str,
    pub link: &'static str,
    pub date: &'static str,
}

/// Link shown on the profile card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileLink {
    pub icon: Icon,
    pub label: &'static str,
    pub url: &'static str,
}

/// The profile card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub email: &'static str,
    pub links: &'static [ProfileLink],
    pub about: &'static str,
}

pub const HEADLINE: &str = "Java Learning Journey";

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        id: "introduction",
        title: "Introduction to Java",
        icon: Icon::BookOpen,
    },
    BlogPost {
        id: "syntax",
        title: "Java Syntax Basics",
        icon: Icon::Code,
    },
    BlogPost {
        id: "oop",
        title: "Object-Oriented Programming in Java",
        icon: Icon::Coffee,
    },
];

pub const ARTICLES: &[Article] = &[
    Article {
        id: 1,
        title: "Java基础入门",
        link: "/articles/java-basics",
        date: "2024-03-20",
    },
    Article {
        id: 2,
        title: "Java面向对象编程",
        link: "/articles/java-oop",
        date: "2024-03-21",
    },
];

pub const PROFILE: Profile = Profile {
    name: "孙乐乐",
    email: "775131260@qq.com",
    links: &[
        ProfileLink {
            icon: Icon::Github,
            label: "github.com/superscholar9",
            url: "https://github.com/superscholar9",
        },
        ProfileLink {
            icon: Icon::GitBranch,
            label: "gitee.com/superscholar9",
            url: "https://gitee.com/miaomiaosun",
        },
    ],
    about: "Passionate about Java development with 5 years of experience. \
            Enthusiastic about sharing knowledge and helping others learn programming.",
};

pub const CODE_EXAMPLE: &str = r#"public class HelloWorld {
    public static void main(String[] args) {
        System.out.println("Hello, Java Learner!");
    }
}"#;

/// A card or section heading with its leading icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    pub icon: Icon,
    pub text: &'static str,
}

impl Heading {
    /// Glyph and text as one label.
    pub fn label(&self) -> String {
        format!("{} {}", self.icon.glyph(), self.text)
    }
}

pub const PAGE_HEADING: Heading = Heading {
    icon: Icon::Cpu,
    text: HEADLINE,
};
pub const CODE_HEADING: Heading = Heading {
    icon: Icon::FileText,
    text: "code example",
};
pub const PROFILE_HEADING: Heading = Heading {
    icon: Icon::User,
    text: "personal profile",
};
pub const ABOUT_HEADING: Heading = Heading {
    icon: Icon::Lightbulb,
    text: "about me",
};
pub const ARTICLES_HEADING: Heading = Heading {
    icon: Icon::FileText,
    text: "recent articles",
};

/// The recent-articles list, newest last.
pub fn articles() -> &'static [Article] {
    ARTICLES
}

pub fn profile() -> &'static Profile {
    &PROFILE
}

/// Tab switcher state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBar {
    posts: &'static [BlogPost],
    active: usize,
}

impl TabBar {
    /// Tabs over `posts`, with the first one active.
    pub fn new(posts: &'static [BlogPost]) -> Self {
        Self { posts, active: 0 }
    }

    pub fn posts(&self) -> &'static [BlogPost] {
        self.posts
    }

    /// The active tab, `None` only when there are no tabs at all.
    pub fn active(&self) -> Option<&'static BlogPost> {
        self.posts.get(self.active)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active().is_some_and(|post| post.id == id)
    }

    /// Make the tab with `id` active. Unknown ids leave the selection as is
    /// and return `false`.
    pub fn select(&mut self, id: &str) -> bool {
        match self.posts.iter().position(|post| post.id == id) {
            Some(index) => {
                if index != self.active {
                    tracing::debug!(tab = id, "tab selected");
                }
                self.active = index;
                true
            }
            None => false,
        }
    }

    /// Body paragraph of the content card for the active tab.
    pub fn body_text(&self) -> String {
        let id = self.active().map_or("", |post| post.id);
        format!(
            "This is where your Java learning content for {id} would go. The enhanced dynamic \
             background creates an immersive and futuristic learning environment, inspiring you \
             to dive deep into the world of Java programming. Explore the topics, experiment \
             with code, and embark on your coding adventure!"
        )
    }
}

impl Default for TabBar {
    fn default() -> Self {
        Self::new(BLOG_POSTS)
    }
}

/// Fade and slide-in of the content card, replayed whenever the active tab
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardTransition {
    started: Option<f64>,
}

impl CardTransition {
    /// Length of the transition in seconds.
    pub const DURATION: f64 = 0.5;
    /// Horizontal offset of the card when the transition starts.
    pub const START_OFFSET: f32 = -20.0;

    /// Play again from the beginning on the next sample.
    pub fn restart(&mut self) {
        self.started = None;
    }

    /// Opacity and horizontal offset at `now` seconds. The first sample
    /// after a restart starts the clock.
    pub fn sample(&mut self, now: f64) -> (f32, f32) {
        let started = *self.started.get_or_insert(now);
        let t = ((now - started) / Self::DURATION).clamp(0.0, 1.0) as f32;
        // ease-out
        let eased = 1.0 - (1.0 - t) * (1.0 - t);
        (eased, Self::START_OFFSET * (1.0 - eased))
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.started.is_some_and(|started| now - started >= Self::DURATION)
    }
}
