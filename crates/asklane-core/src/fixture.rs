//! The builtin hand-authored dataset.
//!
//! Four users, eight tags, four questions, six answers and five comments.
//! User `"1"` is the designated current user.

use chrono::{TimeZone, Utc};

use crate::model::{
    Answer, AnswerId, Comment, CommentId, Question, QuestionId, Tag, TagId, Timestamp, User,
    UserId,
};
use crate::store::Dataset;

/// Id of the user treated as signed in.
pub const CURRENT_USER_ID: &str = "1";

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

/// Build the complete builtin dataset.
pub fn builtin_dataset() -> Dataset {
    Dataset {
        users: users(),
        tags: tags(),
        questions: questions(),
        current_user: UserId::new(CURRENT_USER_ID),
    }
}

fn user(id: &str, name: &str, email: &str, photo: u32, reputation: u32, joined_at: Timestamp) -> User {
    User {
        id: UserId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        avatar_url: format!(
            "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=150"
        ),
        reputation,
        joined_at,
    }
}

fn users() -> Vec<User> {
    vec![
        user("1", "Jane Smith", "jane.smith@example.com", 774909, 1542, at(2022, 1, 15, 0, 0)),
        user("2", "John Doe", "john.doe@example.com", 220453, 3215, at(2021, 5, 22, 0, 0)),
        user("3", "Sarah Wilson", "sarah.wilson@example.com", 1036623, 9876, at(2020, 11, 3, 0, 0)),
        user("4", "Mike Johnson", "mike.johnson@example.com", 91227, 5432, at(2021, 2, 14, 0, 0)),
    ]
}

fn tag(id: &str, name: &str, description: &str, count: u64, created_at: Timestamp) -> Tag {
    Tag {
        id: TagId::new(id),
        name: name.to_string(),
        description: Some(description.to_string()),
        count,
        created_at,
    }
}

fn tags() -> Vec<Tag> {
    vec![
        tag(
            "1",
            "javascript",
            "For questions about JavaScript, a programming language commonly used for web development.",
            2_187_356,
            at(2008, 8, 31, 0, 0),
        ),
        tag(
            "2",
            "python",
            "Python is a multi-paradigm, dynamically typed, multi-purpose programming language.",
            1_852_431,
            at(2008, 9, 2, 0, 0),
        ),
        tag(
            "3",
            "react",
            "React is a JavaScript library for building user interfaces.",
            789_654,
            at(2013, 6, 1, 0, 0),
        ),
        tag(
            "4",
            "node.js",
            "Node.js is an event-based, non-blocking, asynchronous I/O runtime that uses JavaScript.",
            456_123,
            at(2010, 2, 10, 0, 0),
        ),
        tag(
            "5",
            "css",
            "CSS (Cascading Style Sheets) is a style sheet language used for describing the presentation of a document written in HTML.",
            687_459,
            at(2008, 8, 15, 0, 0),
        ),
        tag(
            "6",
            "typescript",
            "TypeScript is a typed superset of JavaScript that compiles to plain JavaScript.",
            497_512,
            at(2012, 10, 1, 0, 0),
        ),
        tag(
            "7",
            "html",
            "HTML (HyperText Markup Language) is the standard markup language for documents designed to be displayed in a web browser.",
            789_632,
            at(2008, 8, 14, 0, 0),
        ),
        tag(
            "8",
            "sql",
            "SQL (Structured Query Language) is a domain-specific language used in programming for managing data in relational databases.",
            412_369,
            at(2008, 8, 1, 0, 0),
        ),
    ]
}

fn comment(id: &str, content: &str, created_at: Timestamp, author: &str, upvotes: u32) -> Comment {
    Comment {
        id: CommentId::new(id),
        content: content.to_string(),
        created_at,
        author_id: UserId::new(author),
        upvotes,
    }
}

fn comments() -> [Comment; 5] {
    [
        comment(
            "1",
            "Have you tried using async/await instead?",
            at(2023, 9, 15, 14, 23),
            "3",
            5,
        ),
        comment(
            "2",
            "This question has been asked before, but the solutions didn't work for me.",
            at(2023, 9, 16, 10, 45),
            "2",
            2,
        ),
        comment(
            "3",
            "Great solution, worked perfectly for me!",
            at(2023, 9, 18, 9, 12),
            "4",
            8,
        ),
        comment(
            "4",
            "Could you explain how this works with large datasets?",
            at(2023, 9, 19, 16, 30),
            "1",
            3,
        ),
        comment(
            "5",
            "I'm having the same issue with Node.js 18. Any updates?",
            at(2023, 9, 20, 11, 5),
            "2",
            4,
        ),
    ]
}

struct AnswerSeed {
    id: &'static str,
    content: &'static str,
    created_at: Timestamp,
    author: &'static str,
    question: &'static str,
    upvotes: u32,
    downvotes: u32,
    accepted: bool,
    comments: Vec<Comment>,
}

impl From<AnswerSeed> for Answer {
    fn from(seed: AnswerSeed) -> Self {
        Answer {
            id: AnswerId::new(seed.id),
            content: seed.content.to_string(),
            created_at: seed.created_at,
            updated_at: None,
            author_id: UserId::new(seed.author),
            question_id: QuestionId::new(seed.question),
            upvotes: seed.upvotes,
            downvotes: seed.downvotes,
            is_accepted: seed.accepted,
            comments: seed.comments,
        }
    }
}

const FETCH_ERRORS_ANSWER: &str = r#"You need to handle the Promise rejection properly. Here's how you can do it:

```javascript
async function fetchData() {
  try {
    const response = await fetch('https://api.example.com/data');
    if (!response.ok) {
      throw new Error('Network response was not ok');
    }
    return await response.json();
  } catch (error) {
    console.error('There was a problem with the fetch operation:', error);
  }
}
```

This ensures that any errors in the fetch operation are caught and handled appropriately."#;

const FETCH_CATCH_ANSWER: &str = r#"Another approach is to use the Promise.catch() method:

```javascript
fetch('https://api.example.com/data')
  .then(response => {
    if (!response.ok) throw new Error('Network response was not ok');
    return response.json();
  })
  .then(data => console.log(data))
  .catch(error => console.error('There was a problem with the fetch operation:', error));
```

This achieves the same result using Promise chaining instead of async/await."#;

const REACT_FC_ANSWER: &str = r#"To correctly type your React components, you should use the following pattern:

```typescript
interface ButtonProps {
  label: string;
  onClick: () => void;
  disabled?: boolean;
}

const Button: React.FC<ButtonProps> = ({ label, onClick, disabled = false }) => {
  return (
    <button onClick={onClick} disabled={disabled}>
      {label}
    </button>
  );
};
```

The React.FC type includes children by default, but you can also be more explicit:

```typescript
interface ContainerProps {
  children: React.ReactNode;
  className?: string;
}

const Container: React.FC<ContainerProps> = ({ children, className }) => {
  return <div className={className}>{children}</div>;
};
```

This approach provides proper type checking for your component props."#;

const REACT_FUNCTION_ANSWER: &str = r#"If you're using the latest versions of TypeScript and React, you can also use this more concise syntax:

```typescript
type ButtonProps = {
  label: string;
  onClick: () => void;
  disabled?: boolean;
}

function Button({ label, onClick, disabled = false }: ButtonProps) {
  return (
    <button onClick={onClick} disabled={disabled}>
      {label}
    </button>
  );
}
```

This approach doesn't use React.FC but still provides full type safety for your components."#;

const NODE_INSTALL_ANSWER: &str = r#"To install Node.js 20 on Ubuntu 22.04, follow these steps:

1. Update your package index:
```bash
sudo apt update
```

2. Install the required packages:
```bash
sudo apt install -y curl
```

3. Add NodeSource repository:
```bash
curl -fsSL https://deb.nodesource.com/setup_20.x | sudo -E bash -
```

4. Install Node.js:
```bash
sudo apt install -y nodejs
```

5. Verify the installation:
```bash
node -v
npm -v
```

This should install Node.js 20.x and npm on your Ubuntu 22.04 system."#;

const JS_RESOURCES_ANSWER: &str = r#"For beginners learning JavaScript in 2023, I recommend these resources:

1. **MDN Web Docs** - Comprehensive and up-to-date: https://developer.mozilla.org/en-US/docs/Web/JavaScript
2. **JavaScript.info** - Modern JavaScript tutorial: https://javascript.info/
3. **freeCodeCamp** - Interactive learning with exercises: https://www.freecodecamp.org/learn/javascript-algorithms-and-data-structures/
4. **Eloquent JavaScript** - Great book available free online: https://eloquentjavascript.net/
5. **JavaScript30** by Wes Bos - Build 30 things in 30 days: https://javascript30.com/

Start with the basics: variables, data types, functions, and control structures. Then move on to more advanced topics like asynchronous JavaScript, closures, and ES6+ features.

Practice by building small projects - that's the best way to solidify your knowledge."#;

fn answers(comments: &[Comment; 5]) -> [Answer; 6] {
    [
        AnswerSeed {
            id: "1",
            content: FETCH_ERRORS_ANSWER,
            created_at: at(2023, 9, 15, 16, 45),
            author: "3",
            question: "1",
            upvotes: 24,
            downvotes: 2,
            accepted: true,
            comments: vec![comments[2].clone()],
        }
        .into(),
        AnswerSeed {
            id: "2",
            content: FETCH_CATCH_ANSWER,
            created_at: at(2023, 9, 16, 9, 15),
            author: "2",
            question: "1",
            upvotes: 10,
            downvotes: 1,
            accepted: false,
            comments: vec![],
        }
        .into(),
        AnswerSeed {
            id: "3",
            content: REACT_FC_ANSWER,
            created_at: at(2023, 10, 1, 14, 30),
            author: "4",
            question: "2",
            upvotes: 16,
            downvotes: 0,
            accepted: true,
            comments: vec![comments[3].clone()],
        }
        .into(),
        AnswerSeed {
            id: "4",
            content: REACT_FUNCTION_ANSWER,
            created_at: at(2023, 10, 2, 10, 45),
            author: "1",
            question: "2",
            upvotes: 8,
            downvotes: 2,
            accepted: false,
            comments: vec![],
        }
        .into(),
        AnswerSeed {
            id: "5",
            content: NODE_INSTALL_ANSWER,
            created_at: at(2023, 11, 10, 15, 20),
            author: "2",
            question: "3",
            upvotes: 12,
            downvotes: 1,
            accepted: true,
            comments: vec![],
        }
        .into(),
        AnswerSeed {
            id: "6",
            content: JS_RESOURCES_ANSWER,
            created_at: at(2023, 12, 5, 11, 30),
            author: "3",
            question: "4",
            upvotes: 20,
            downvotes: 0,
            accepted: true,
            comments: vec![],
        }
        .into(),
    ]
}

const FETCH_ERRORS_QUESTION: &str = r#"I'm trying to fetch data from an API but I'm having trouble handling errors properly. Here's my current code:

```javascript
fetch('https://api.example.com/data')
  .then(response => response.json())
  .then(data => console.log(data))
  .catch(error => console.log('Error:', error));
```

The problem is that even when the API returns a 404 or 500 status, it doesn't go to the catch block. How can I properly detect and handle these error responses?"#;

const REACT_TYPES_QUESTION: &str = r#"I'm new to TypeScript and I'm trying to understand the best practices for typing React components. I've seen different approaches like:

```typescript
// Approach 1
interface Props {
  name: string;
}
function Greeting({ name }: Props) {
  return <h1>Hello, {name}!</h1>;
}

// Approach 2
const Greeting: React.FC<{ name: string }> = ({ name }) => {
  return <h1>Hello, {name}!</h1>;
};
```

Which approach is recommended and why? Are there any other patterns I should be aware of?"#;

const NODE_INSTALL_QUESTION: &str = r#"I need to install Node.js 20 on my Ubuntu 22.04 server for a new project. What's the recommended way to do this? I prefer to use the official repositories if possible, but I'm open to using NVM or other methods if that's better.

What are the steps to install Node.js 20 on Ubuntu 22.04, and are there any potential issues I should be aware of?"#;

const JS_RESOURCES_QUESTION: &str = r#"I'm completely new to programming and want to learn JavaScript as my first language. What are the best up-to-date resources for beginners in 2023?

I prefer online resources, but book recommendations are welcome too. I learn best by doing, so resources with practical exercises would be ideal.

Also, what would be a good learning path? Should I start with plain JavaScript before moving to frameworks like React or Vue?"#;

fn questions() -> Vec<Question> {
    let tags = tags();
    let comments = comments();
    let [a1, a2, a3, a4, a5, a6] = answers(&comments);
    let [c1, c2, _, _, c5] = comments;

    vec![
        Question {
            id: QuestionId::new("1"),
            title: "How to properly handle fetch API errors in JavaScript?".to_string(),
            content: FETCH_ERRORS_QUESTION.to_string(),
            created_at: at(2023, 9, 15, 10, 30),
            updated_at: None,
            author_id: UserId::new("1"),
            tags: vec![tags[0].clone(), tags[3].clone()],
            upvotes: 35,
            downvotes: 2,
            view_count: 456,
            answers: vec![a1, a2],
            comments: vec![c1, c2],
        },
        Question {
            id: QuestionId::new("2"),
            title: "What is the best practice for typing React components with TypeScript?"
                .to_string(),
            content: REACT_TYPES_QUESTION.to_string(),
            created_at: at(2023, 10, 1, 9, 15),
            updated_at: None,
            author_id: UserId::new("2"),
            tags: vec![tags[0].clone(), tags[2].clone(), tags[5].clone()],
            upvotes: 42,
            downvotes: 3,
            view_count: 789,
            answers: vec![a3, a4],
            comments: vec![],
        },
        Question {
            id: QuestionId::new("3"),
            title: "How to install Node.js 20 on Ubuntu 22.04?".to_string(),
            content: NODE_INSTALL_QUESTION.to_string(),
            created_at: at(2023, 11, 10, 12, 45),
            updated_at: None,
            author_id: UserId::new("3"),
            tags: vec![tags[3].clone(), tags[7].clone()],
            upvotes: 18,
            downvotes: 1,
            view_count: 342,
            answers: vec![a5],
            comments: vec![c5],
        },
        Question {
            id: QuestionId::new("4"),
            title: "Best resources for learning JavaScript in 2023 as a beginner".to_string(),
            content: JS_RESOURCES_QUESTION.to_string(),
            created_at: at(2023, 12, 5, 8, 20),
            updated_at: None,
            author_id: UserId::new("4"),
            tags: vec![tags[0].clone()],
            upvotes: 27,
            downvotes: 0,
            view_count: 512,
            answers: vec![a6],
            comments: vec![],
        },
    ]
}
