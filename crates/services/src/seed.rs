//! Built-in default question set and the course catalog it spans.

use prep_core::model::{CourseCatalog, CourseCode, Question, QuestionDraft, QuestionId};

/// The selectable courses, in display order.
///
/// The first entry's code is the default course: records that carry no
/// `lesson` field are treated as belonging to it.
///
/// # Panics
///
/// Panics if the label list stops forming a valid catalog; caught by the
/// tests below.
#[must_use]
pub fn default_catalog() -> CourseCatalog {
    CourseCatalog::new(vec![
        "IE553 Linear Optimization".to_owned(),
        "IE455 Network Optimization".to_owned(),
    ])
    .expect("built-in course catalog is valid")
}

fn seed(id: u64, topic: &str, lesson: &str, question: &str, solution: &str) -> Question {
    QuestionDraft::new(question, solution)
        .with_topic(topic)
        .with_course(CourseCode::new(lesson).expect("built-in course code is valid"))
        .validate()
        .expect("built-in question is valid")
        .assign_id(QuestionId::new(id))
}

/// The built-in default set, in its fixed seed order.
///
/// A fresh store is initialized with this set; an existing store absorbs
/// any ids it is missing through the append-only merge. Ids here are
/// reserved and stable across releases.
///
/// # Panics
///
/// Panics if the built-in content stops satisfying the question contract;
/// caught by the tests below.
#[must_use]
pub fn default_question_set() -> Vec<Question> {
    vec![
        seed(
            1,
            "Modeling",
            "IE553",
            "Write the standard form of a linear program and explain how an \
             inequality constraint is brought into it.",
            "Minimize c^T x subject to Ax = b and x >= 0. A `<=` constraint gains \
             a nonnegative slack variable, a `>=` constraint a nonnegative surplus \
             variable; a free variable is split into the difference of two \
             nonnegative ones.",
        ),
        seed(
            2,
            "Geometry",
            "IE553",
            "Why can an optimal solution of a bounded, feasible LP always be found \
             at a vertex of the feasible region?",
            "The feasible region is a polyhedron and the objective is linear, so the \
             optimum over the region equals the optimum over its extreme points: \
             moving along any feasibility-preserving direction changes the objective \
             linearly, so no interior point can beat every vertex of the face it \
             lies on.",
        ),
        seed(
            3,
            "Simplex",
            "IE553",
            "At an optimal simplex tableau a *nonbasic* variable has reduced cost \
             zero. What does that tell you?",
            "The LP has alternative optima: that variable can enter the basis and be \
             increased without changing the objective value, tracing an edge of \
             optimal solutions.",
        ),
        seed(
            4,
            "Simplex",
            "IE553",
            "How does the two-phase method decide that an LP is infeasible?",
            "Phase one minimizes the sum of artificial variables. If its optimal \
             value is positive, no feasible solution exists for the original \
             constraints; if it is zero, the artificials can be driven out and phase \
             two starts from the feasible basis found.",
        ),
        seed(
            5,
            "Duality",
            "IE553",
            "State the weak duality theorem for the primal max problem \
             `max c^T x, Ax <= b, x >= 0`.",
            "For any primal feasible x and dual feasible y, c^T x <= b^T y. In \
             particular every dual feasible solution bounds the primal optimum from \
             above.",
        ),
        seed(
            6,
            "Duality",
            "IE553",
            "What do the complementary slackness conditions say, and what are they \
             used for?",
            "At optimality, y_i (b_i - A_i x) = 0 for every constraint and \
             x_j (c_j - y^T A_j) = 0 for every variable: a positive dual price \
             forces its constraint tight, a positive primal variable forces its \
             reduced cost to zero. They are used to recover one optimal solution \
             from the other and to verify optimality of a candidate pair.",
        ),
        seed(
            7,
            "Sensitivity",
            "IE553",
            "Define the shadow price of a constraint and its range of validity.",
            "The shadow price is the rate of change of the optimal objective per \
             unit increase in the constraint's right-hand side. It is valid while \
             the current basis stays optimal, i.e. within the allowable RHS range \
             from the sensitivity report.",
        ),
        seed(
            8,
            "Max Flow",
            "IE455",
            "State the max-flow min-cut theorem.",
            "In any capacitated network the maximum value of an s-t flow equals the \
             minimum capacity over all s-t cuts. A flow is maximum exactly when the \
             residual network admits no augmenting path.",
        ),
        seed(
            9,
            "Shortest Path",
            "IE455",
            "Why does Dijkstra's algorithm require nonnegative arc lengths?",
            "It permanently settles the closest unsettled node, assuming no later \
             path can improve it. A negative arc can make a longer-looking detour \
             cheaper after settlement, invalidating the label; label-correcting \
             methods such as Bellman-Ford handle that case.",
        ),
        seed(
            10,
            "Transportation",
            "IE455",
            "What does the northwest corner rule produce, and what does it ignore?",
            "It produces an initial basic feasible solution of the transportation \
             problem by repeatedly saturating the upper-left cell of the remaining \
             table. It ignores costs entirely, so the start may be far from optimal \
             and is refined by MODI or stepping-stone iterations.",
        ),
    ]
}
