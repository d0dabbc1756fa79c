//! Key-concepts paragraph, keyed only by language

use clp_domain::value_objects::SupportedLanguage;

/// Fixed concepts paragraph for `language`
pub fn concepts(language: SupportedLanguage) -> &'static str {
    match language {
        SupportedLanguage::Python => {
            "Python uses indentation instead of braces to group statements, so the spaces at the start of a line matter. Variables are dynamically typed: a name can hold any kind of value and its type is checked while the program runs. The standard library and the wider package ecosystem cover most everyday tasks."
        }
        SupportedLanguage::C => {
            "C provides low-level control and direct memory management. Every variable has a fixed type declared up front, memory obtained with `malloc` must be released with `free`, and pointers give direct access to memory addresses. Programs start running in `main`."
        }
        SupportedLanguage::JavaScript => {
            "JavaScript is versatile and supports multiple programming paradigms: functions are values that can be passed around, objects are created on the fly, and asynchronous work is handled with promises and `async`/`await`. It runs in every web browser and on servers through Node.js."
        }
        SupportedLanguage::React => {
            "React builds user interfaces from components: functions that take props and return JSX describing what to show. State managed with hooks such as `useState` triggers a re-render whenever it changes, and data flows one way, from parent components down to their children."
        }
        SupportedLanguage::Html => {
            "HTML structures content using semantic tags and elements. Tags are nested inside each other to form a tree, attributes such as `href` and `class` configure elements, and semantic tags like `<nav>` and `<main>` describe the role of each part of the page."
        }
        SupportedLanguage::Css => {
            "CSS controls the visual presentation and layout of web content. Selectors choose which elements a rule applies to, properties set individual styles, and when several rules match the same element the more specific one wins (the cascade)."
        }
        SupportedLanguage::Java => {
            "Java is platform-independent and strongly object-oriented: all code lives inside classes, types are checked by the compiler, and the same compiled bytecode runs on any Java Virtual Machine. Memory is reclaimed automatically by the garbage collector."
        }
        SupportedLanguage::Cpp => {
            "C++ combines C's efficiency with object-oriented features. Classes bundle data with behaviour, templates let one piece of code work with many types, and the standard library (`std`) provides containers such as `std::vector` and streams such as `std::cout`."
        }
    }
}
