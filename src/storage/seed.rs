use crate::models::{Question, Quiz, User};

/// Bcrypt hash of the default admin password.
const ADMIN_PASSWORD_HASH: &str = "$2a$10$92IXUNpkjO0rOQ5byMi.Ye4oKoEa3Ro9llC/.og/at2.uheWG/igi";

/// Accounts present in the in-memory backend at startup.
pub fn users() -> Vec<User> {
    vec![User {
        id: 1,
        username: "admin".to_string(),
        email: "admin@quiz.com".to_string(),
        password_hash: ADMIN_PASSWORD_HASH.to_string(),
        is_admin: true,
    }]
}

/// Fixed quiz catalog for the in-memory backend. The relational backend
/// loads the same content from `db/schema.sql`.
pub fn quizzes() -> Vec<Quiz> {
    vec![
        Quiz {
            id: 1,
            title: "Cybersecurity Fundamentals".to_string(),
            description: "Test your knowledge of cybersecurity basics".to_string(),
            questions: vec![
                Question {
                    id: 1,
                    text: "What does CIA stand for in cybersecurity?".to_string(),
                    options: vec![
                        "Central Intelligence Agency".to_string(),
                        "Confidentiality, Integrity, Availability".to_string(),
                        "Computer Information Access".to_string(),
                        "Cyber Intelligence Analysis".to_string(),
                    ],
                    correct_index: 1,
                },
                Question {
                    id: 2,
                    text: "Which of the following is a type of malware?".to_string(),
                    options: vec![
                        "Firewall".to_string(),
                        "Antivirus".to_string(),
                        "Trojan".to_string(),
                        "Router".to_string(),
                    ],
                    correct_index: 2,
                },
                Question {
                    id: 3,
                    text: "What is phishing?".to_string(),
                    options: vec![
                        "A type of fishing".to_string(),
                        "Social engineering attack via email".to_string(),
                        "Network protocol".to_string(),
                        "Encryption method".to_string(),
                    ],
                    correct_index: 1,
                },
                Question {
                    id: 4,
                    text: "What is the purpose of a firewall?".to_string(),
                    options: vec![
                        "Speed up internet".to_string(),
                        "Block unauthorized access".to_string(),
                        "Store passwords".to_string(),
                        "Encrypt files".to_string(),
                    ],
                    correct_index: 1,
                },
                Question {
                    id: 5,
                    text: "Which encryption is strongest?".to_string(),
                    options: vec![
                        "DES".to_string(),
                        "3DES".to_string(),
                        "AES-256".to_string(),
                        "MD5".to_string(),
                    ],
                    correct_index: 2,
                },
            ],
        },
        Quiz {
            id: 2,
            title: "Network Security".to_string(),
            description: "Advanced network security concepts".to_string(),
            questions: vec![
                Question {
                    id: 1,
                    text: "What port does HTTPS use?".to_string(),
                    options: vec![
                        "80".to_string(),
                        "443".to_string(),
                        "21".to_string(),
                        "25".to_string(),
                    ],
                    correct_index: 1,
                },
                Question {
                    id: 2,
                    text: "What is a DDoS attack?".to_string(),
                    options: vec![
                        "Data theft".to_string(),
                        "Distributed Denial of Service".to_string(),
                        "Database corruption".to_string(),
                        "Device malfunction".to_string(),
                    ],
                    correct_index: 1,
                },
                Question {
                    id: 3,
                    text: "What is network segmentation?".to_string(),
                    options: vec![
                        "Dividing network into segments".to_string(),
                        "Joining networks".to_string(),
                        "Network speed optimization".to_string(),
                        "Cable management".to_string(),
                    ],
                    correct_index: 0,
                },
            ],
        },
    ]
}
