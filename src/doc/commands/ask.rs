/*!
# `ASK <text>`

## Purpose
Show a prompt and read one line of text from the user.

## Remarks
The same as `ASKFOR TEXT <text>`. The line is returned as text, without
its line ending.

## Example
```text
1 RESERVE NAME _ TEXT
2 NAME IS ASK "What is your name?"
3 SAY NAME
4 END
```

*/
