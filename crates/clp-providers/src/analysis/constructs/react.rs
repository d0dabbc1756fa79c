use clp_domain::value_objects::ConstructCategory as Cat;

use crate::analysis::patterns::Detector;

pub(super) fn detectors() -> Vec<Detector> {
    [
        Detector::new(
            Cat::Hook,
            "React Hooks",
            r"\buse[A-Z]\w*\s*\(",
            "Hooks are functions starting with `use` that let components keep state and run side effects. They must be called at the top level of a component.",
            "const value = useContext(ThemeContext);",
        ),
        Detector::new(
            Cat::Hook,
            "State Hook",
            r"\buseState\s*\(",
            "`useState` returns the current value and a setter. Calling the setter re-renders the component with the new value.",
            "const [count, setCount] = useState(0);",
        ),
        Detector::new(
            Cat::Hook,
            "Effect Hook",
            r"\buseEffect\s*\(",
            "`useEffect` runs code after rendering, such as fetching data. The dependency array controls when it runs again.",
            "useEffect(() => { document.title = title; }, [title]);",
        ),
        Detector::new(
            Cat::Jsx,
            "JSX Element",
            r"<[A-Za-z][\w.]*(?:\s[^<>]*)?/?>",
            "JSX is HTML-like syntax inside JavaScript that describes what the component renders.",
            "return <h1>Hello</h1>;",
        ),
        Detector::new(
            Cat::Declaration,
            "Props Destructuring",
            r"(?:\bfunction\s+[A-Z]\w*\s*|\b[A-Z]\w*\s*=\s*)\(\s*\{",
            "Pulls individual props out of the props object directly in the parameter list.",
            "function Card({ title, body }) { ... }",
        ),
        Detector::new(
            Cat::Function,
            "Component Definition",
            r"\bfunction\s+[A-Z]\w*\s*\(|\b(?:const|let)\s+[A-Z]\w*\s*=\s*(?:\([^()]*\)|\w+)\s*=>|\bclass\s+[A-Z]\w*\s+extends\s+(?:React\.)?Component\b",
            "A React component is a function (or class) whose name starts with a capital letter and which returns JSX.",
            "const Button = () => <button>OK</button>;",
        ),
        Detector::new(
            Cat::Event,
            "Event Handler",
            r"\bon[A-Z]\w*\s*=\s*\{",
            "Props such as `onClick` attach a function that React calls when the user interacts with the element.",
            "<button onClick={handleClick}>Save</button>",
        ),
        Detector::new(
            Cat::Conditional,
            "Conditional Rendering",
            r"&&\s*\(?\s*<|\?\s*\(?\s*<",
            "Shows or hides markup depending on a condition, using `&&` or the ternary operator inside JSX.",
            "{isLoggedIn && <Logout />}",
        ),
        Detector::new(
            Cat::Loop,
            "List Rendering",
            r"\{\s*[\w.]+\.map\s*\(",
            "Renders one element per array item with `.map`. Each element needs a stable `key` prop.",
            "{items.map((item) => <li key={item.id}>{item.name}</li>)}",
        ),
        Detector::new(
            Cat::Import,
            "React Import",
            r#"\bimport\b[^;\n]*\bfrom\s+['"]react(?:-dom)?(?:/[\w-]+)?['"]|\brequire\s*\(\s*['"]react['"]"#,
            "Imports React itself or React APIs such as hooks from the `react` package.",
            "import React, { useState } from 'react';",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
